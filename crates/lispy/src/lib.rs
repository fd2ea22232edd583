//! Lispy: value model, lexical environment, and tree-walking evaluator for a
//! small Lisp dialect.
//!
//! This crate is the CORE described in the project specification: it knows
//! how to reduce a value to normal form given an environment, how closures
//! capture and restore bindings, and how the builtin library is registered.
//! It does not know how to turn source text into an [`ast::AstNode`] tree —
//! that boundary is `lispy-cli`'s job, via whatever grammar it chooses. This
//! crate only consumes the already-parsed tree.

pub mod ast;
pub mod builtins;
pub mod call;
pub mod context;
pub mod environment;
pub mod errors;
pub mod eval;
pub mod reader;
pub mod value;

pub use ast::AstNode;
pub use context::{EvalContext, NoParser, Parser, Printer, StdoutPrinter};
pub use environment::{EvalLimits, Environment, SharedEnvironment};
pub use eval::{eval, eval_with_context, eval_with_limits};
pub use reader::read;
pub use value::Value;

/// Builds a fresh global environment with every builtin from §4.E registered.
pub fn global_environment() -> SharedEnvironment {
    builtins::register_all(Environment::new_shared())
}

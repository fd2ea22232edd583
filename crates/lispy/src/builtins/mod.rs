//! Primitive operations registered into the root environment (spec.md §4.E).
//!
//! Each builtin has its own submodule, mirroring the teacher's
//! `builtins/<name>.rs` layout (`examples/parcadei-ouros/crates/ouros/src/builtins/mod.rs`).
//! Unlike the teacher's Python builtins, which return `RunResult<Value>` and
//! propagate failures through `?`, these return a plain `Value`: an error
//! here is just another `Value::Error`, produced and returned like any other
//! result (spec.md §3.2 "errors are first-class").

mod arithmetic;
mod compare;
mod cond;
mod io;
mod lambda_ctor;
mod list;
mod vars;

use strum::{Display, EnumString};

use crate::context::EvalContext;
use crate::environment::SharedEnvironment;
use crate::errors;
use crate::value::Value;

/// Enumerates every builtin name §4.E registers into the global environment.
///
/// Uses strum derives for `Display`/`FromStr`, mirroring the teacher's
/// `BuiltinsFunctions` (`builtins/mod.rs`). Operator-shaped names (`+`, `==`,
/// `\`, …) are not valid Rust identifiers, so each such variant pins its
/// serialized form with `#[strum(serialize = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Builtin {
    List,
    Head,
    Tail,
    Join,
    Eval,
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    Def,
    #[strum(serialize = "=")]
    Put,
    #[strum(serialize = "\\")]
    Lambda,
    If,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = "<=")]
    Le,
    Load,
    Print,
    Error,
}

/// Every builtin in registration order, for [`register_all`].
const ALL: &[Builtin] = &[
    Builtin::List,
    Builtin::Head,
    Builtin::Tail,
    Builtin::Join,
    Builtin::Eval,
    Builtin::Add,
    Builtin::Sub,
    Builtin::Mul,
    Builtin::Div,
    Builtin::Def,
    Builtin::Put,
    Builtin::Lambda,
    Builtin::If,
    Builtin::Eq,
    Builtin::Ne,
    Builtin::Gt,
    Builtin::Lt,
    Builtin::Ge,
    Builtin::Le,
    Builtin::Load,
    Builtin::Print,
    Builtin::Error,
];

/// Binds every builtin's name to its `Value::Function(Function::Builtin(_))`
/// handle at the root of `env` and returns `env` back to the caller.
pub fn register_all(env: SharedEnvironment) -> SharedEnvironment {
    for b in ALL {
        env.def(&b.to_string(), &Value::builtin(*b));
    }
    env
}

/// Dispatches a builtin call (spec.md §4.F "Builtin path").
pub(crate) fn call(b: Builtin, env: &SharedEnvironment, args: Vec<Value>, ctx: &mut EvalContext, depth: usize) -> Value {
    match b {
        Builtin::List => list::list(args),
        Builtin::Head => list::head(args),
        Builtin::Tail => list::tail(args),
        Builtin::Join => list::join(args),
        Builtin::Eval => list::eval_builtin(env, args, ctx, depth),
        Builtin::Add => arithmetic::op("+", args),
        Builtin::Sub => arithmetic::op("-", args),
        Builtin::Mul => arithmetic::op("*", args),
        Builtin::Div => arithmetic::op("/", args),
        Builtin::Def => vars::var(env, "def", args),
        Builtin::Put => vars::var(env, "=", args),
        Builtin::Lambda => lambda_ctor::lambda(env, args),
        Builtin::If => cond::if_(env, args, ctx, depth),
        Builtin::Eq => compare::equality("==", args),
        Builtin::Ne => compare::equality("!=", args),
        Builtin::Gt => compare::order(">", args),
        Builtin::Lt => compare::order("<", args),
        Builtin::Ge => compare::order(">=", args),
        Builtin::Le => compare::order("<=", args),
        Builtin::Load => io::load(env, args, ctx),
        Builtin::Print => io::print(args, ctx),
        Builtin::Error => io::error(args),
    }
}

/// Checks the argument count is exactly `expected`; on mismatch, `args` is
/// consumed (dropped) and an Arity Error is returned.
pub(crate) fn check_arity(name: &str, args: &[Value], expected: usize) -> Option<Value> {
    (args.len() != expected).then(|| errors::wrong_arity(name, args.len(), expected))
}

/// Checks the argument count is at least `at_least`.
pub(crate) fn check_arity_at_least(name: &str, args: &[Value], at_least: usize) -> Option<Value> {
    (args.len() < at_least).then(|| errors::at_least_arity(name, args.len(), at_least))
}

/// Checks `args[index]` is a `QExpr`, returning a Type Error if not.
pub(crate) fn check_is_qexpr(name: &str, args: &[Value], index: usize) -> Option<Value> {
    match &args[index] {
        Value::QExpr(_) => None,
        other => Some(errors::wrong_type(name, index, other.kind_name(), "Q-Expression")),
    }
}

/// Checks `args[index]` is a non-empty `QExpr` (spec.md §4.E "passed {}").
pub(crate) fn check_nonempty_qexpr(name: &str, args: &[Value], index: usize) -> Option<Value> {
    if let Some(e) = check_is_qexpr(name, args, index) {
        return Some(e);
    }
    match &args[index] {
        Value::QExpr(c) if c.is_empty() => Some(errors::empty_list(name, index)),
        _ => None,
    }
}

/// Checks `args[index]` is a `Number`.
pub(crate) fn check_is_number(name: &str, args: &[Value], index: usize) -> Option<Value> {
    match &args[index] {
        Value::Number(_) => None,
        other => Some(errors::wrong_type(name, index, other.kind_name(), "Number")),
    }
}

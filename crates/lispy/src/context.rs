//! Execution context threaded through `eval`/`call`/the builtin library: the
//! recursion-depth budget plus the two pluggable I/O collaborators the spec
//! calls for (`print`'s output sink and `load`'s source parser).
//!
//! This mirrors the teacher's `PrintWriter` trait (`io.rs`), threaded through
//! builtin dispatch so callers can capture or redirect output, extended here
//! with a second trait for the parser `load` needs. Concrete syntax parsing
//! is outside CORE's scope (spec.md §0); `lispy-cli` supplies the real
//! implementation, built on its own `nom` grammar.

use crate::ast::AstNode;
use crate::environment::EvalLimits;

/// Receives the text the `print` builtin emits (spec.md §4.E).
pub trait Printer {
    /// Called once per top-level `print` call with the fully-formatted line
    /// (arguments already space-joined), newline not included.
    fn print_line(&mut self, line: &str);
}

/// The default `Printer`: writes one line to stdout per call.
#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Parses source text into top-level [`AstNode`] forms for the `load`
/// builtin (spec.md §4.C's declared boundary between the out-of-scope
/// concrete grammar and the in-scope Reader).
pub trait Parser {
    fn parse_program(&self, source: &str) -> Result<Vec<AstNode>, String>;
}

/// A `Parser` that always fails. Used by [`crate::eval`]'s default context
/// for embedders that never call `load`.
#[derive(Debug, Default)]
pub struct NoParser;

impl Parser for NoParser {
    fn parse_program(&self, _source: &str) -> Result<Vec<AstNode>, String> {
        Err("no parser configured: load() is unavailable in this context".to_owned())
    }
}

/// Bundles the recursion-depth guard with the `print`/`load` collaborators
/// for a single top-level evaluation.
pub struct EvalContext<'a> {
    pub limits: EvalLimits,
    pub printer: &'a mut dyn Printer,
    pub parser: &'a dyn Parser,
}

impl<'a> EvalContext<'a> {
    pub fn new(printer: &'a mut dyn Printer, parser: &'a dyn Parser) -> Self {
        Self { limits: EvalLimits::default(), printer, parser }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: EvalLimits) -> Self {
        self.limits = limits;
        self
    }
}

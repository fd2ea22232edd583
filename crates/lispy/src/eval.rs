//! The evaluator (spec.md §4.D): reduces a `Value` to normal form given an
//! `Environment`.

use crate::context::{EvalContext, NoParser, StdoutPrinter};
use crate::environment::{EvalLimits, SharedEnvironment};
use crate::errors;
use crate::value::{Function, Value};

/// Evaluates `v` in `env`, printing through stdout and with `load` disabled.
/// Embedders that need `print`/`load` redirection should build their own
/// [`EvalContext`] and call [`eval_with_context`].
pub fn eval(env: &SharedEnvironment, v: Value) -> Value {
    let mut printer = StdoutPrinter;
    let parser = NoParser;
    let mut ctx = EvalContext::new(&mut printer, &parser);
    eval_with_depth(env, v, &mut ctx, 0)
}

/// Evaluates `v` in `env` under an explicit recursion-depth ceiling, using
/// the default stdout printer and no `load` support.
pub fn eval_with_limits(env: &SharedEnvironment, v: Value, limits: EvalLimits) -> Value {
    let mut printer = StdoutPrinter;
    let parser = NoParser;
    let mut ctx = EvalContext::new(&mut printer, &parser).with_limits(limits);
    eval_with_depth(env, v, &mut ctx, 0)
}

/// Evaluates `v` in `env` under a caller-supplied context (SPEC_FULL.md §11).
pub fn eval_with_context(env: &SharedEnvironment, v: Value, ctx: &mut EvalContext) -> Value {
    eval_with_depth(env, v, ctx, 0)
}

pub(crate) fn eval_with_depth(env: &SharedEnvironment, v: Value, ctx: &mut EvalContext, depth: usize) -> Value {
    if depth > ctx.limits.max_depth {
        return errors::recursion_limit();
    }
    match v {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(children) => eval_sexpr(env, children, ctx, depth),
        // Numbers, Strings, Errors, Functions, and QExprs evaluate to
        // themselves (spec.md §4.D.2).
        other => other,
    }
}

/// SExpr reduction (spec.md §4.D.1).
fn eval_sexpr(env: &SharedEnvironment, children: Vec<Value>, ctx: &mut EvalContext, depth: usize) -> Value {
    // 1. Inner evaluation: reduce every child first.
    let mut reduced = Vec::with_capacity(children.len());
    for child in children {
        reduced.push(eval_with_depth(env, child, ctx, depth + 1));
    }

    // 2. Error sweep: leftmost error wins.
    if let Some(i) = reduced.iter().position(Value::is_error) {
        return reduced.remove(i);
    }

    // 3. Empty.
    if reduced.is_empty() {
        return Value::SExpr(reduced);
    }

    // 4. Unary fold.
    if reduced.len() == 1 {
        return reduced.pop().expect("len checked above");
    }

    // 5. Head check.
    let head = reduced.remove(0);
    let Value::Function(func) = head else {
        return errors::not_a_function(head.kind_name());
    };

    // 6. Apply the remaining children as arguments.
    crate::call::apply(env, func, reduced, ctx, depth)
}

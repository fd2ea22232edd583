//! `load`, `print`, `error` (spec.md §4.E): the only builtins that touch the
//! outside world, through the [`EvalContext`]'s `Printer`/`Parser`
//! collaborators rather than directly.

use std::fmt::Write as _;

use super::check_arity;
use crate::context::EvalContext;
use crate::environment::SharedEnvironment;
use crate::errors;
use crate::value::Value;

/// `(load "path")`: parses the file, evaluates each top-level form in
/// order, prints any Error results, and returns an empty `SExpr`. A read or
/// parse failure yields a Load Error carrying the parser's message.
pub fn load(env: &SharedEnvironment, mut args: Vec<Value>, ctx: &mut EvalContext) -> Value {
    if let Some(e) = check_arity("load", &args, 1) {
        return e;
    }
    let arg = args.remove(0);
    let Value::Str(path) = arg else {
        return errors::wrong_type("load", 0, arg.kind_name(), "String");
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(s) => s,
        Err(err) => return errors::load_error(err),
    };
    let forms = match ctx.parser.parse_program(&source) {
        Ok(forms) => forms,
        Err(msg) => return errors::load_error(msg),
    };

    for form in &forms {
        let value = crate::reader::read(form);
        let result = crate::eval::eval_with_depth(env, value, ctx, 0);
        if result.is_error() {
            ctx.printer.print_line(&result.to_string());
        }
    }
    Value::empty_sexpr()
}

/// `(print a b ...)`: prints every argument separated by a space, followed
/// by a newline; returns an empty `SExpr`.
pub fn print(args: Vec<Value>, ctx: &mut EvalContext) -> Value {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let _ = write!(line, "{arg}");
    }
    ctx.printer.print_line(&line);
    Value::empty_sexpr()
}

/// `(error "message")`: returns an Error carrying the string's contents
/// verbatim.
pub fn error(mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity("error", &args, 1) {
        return e;
    }
    match args.remove(0) {
        Value::Str(msg) => Value::error(msg),
        other => errors::wrong_type("error", 0, other.kind_name(), "String"),
    }
}

//! Named constructors for the `Value::Error` messages the evaluator and
//! builtin library produce (spec.md §7).
//!
//! These mirror the teacher's `ExcType` constructors (`exception_private.rs`)
//! in spirit — one function per error shape, so call sites read as
//! `errors::type_error(...)` rather than ad-hoc `format!`s scattered through
//! the builtins. Unlike the teacher, there is no catchable exception
//! hierarchy: every one of these simply builds a `Value::Error`, which
//! propagates by being returned and by the SExpr error sweep (§4.D.1),
//! never by unwinding.
//!
//! Message wording for the argument-checking errors follows
//! `examples/original_source/lispy.h`'s `LASSERT_*` macros verbatim
//! (SPEC_FULL.md §10), built with `format!` rather than a formatting
//! constructor so a `%` inside a user-supplied string (e.g. via the `error`
//! builtin) is never misinterpreted — the bug SPEC_FULL.md §10 and spec.md
//! §9 call out in the original's `lval_err`.

use crate::value::Value;

pub fn unbound_symbol(name: &str) -> Value {
    Value::error(format!("Unbound Symbol: '{name}'"))
}

pub fn wrong_arity(func: &str, got: usize, expected: usize) -> Value {
    Value::error(format!(
        "Function '{func}' passed incorrect number of arguments. Got {got}, expected {expected}."
    ))
}

pub fn at_least_arity(func: &str, got: usize, at_least: usize) -> Value {
    Value::error(format!(
        "Function '{func}' passed incorrect number of arguments. Got {got}, expected at least {at_least}."
    ))
}

pub fn wrong_type(func: &str, index: usize, got: &str, expected: &str) -> Value {
    Value::error(format!(
        "Function '{func}' passed incorrect type for argument {index}. Got {got}, expected {expected}."
    ))
}

pub fn empty_list(func: &str, index: usize) -> Value {
    Value::error(format!("Function '{func}' passed {{}} for argument {index}."))
}

pub fn division_by_zero() -> Value {
    Value::error("Division by zero")
}

pub fn invalid_number(text: &str) -> Value {
    Value::error(format!("Invalid number: '{text}'"))
}

pub fn not_a_function(got: &str) -> Value {
    Value::error(format!("S-Expression starts with incorrect type. Got {got}, expected Function."))
}

pub fn invalid_formals_format() -> Value {
    Value::error("invalid format: '&' not followed by single symbol")
}

pub fn too_many_arguments(got: usize, expected: usize) -> Value {
    Value::error(format!(
        "Function passed too many arguments. Got {got}, expected {expected}."
    ))
}

pub fn formals_must_be_symbols() -> Value {
    Value::error("Cannot define non-symbol. Lambda formals must all be symbols.")
}

pub fn load_error(detail: impl std::fmt::Display) -> Value {
    Value::error(format!("Could not load file: {detail}"))
}

pub fn recursion_limit() -> Value {
    Value::error("Recursion depth exceeded")
}

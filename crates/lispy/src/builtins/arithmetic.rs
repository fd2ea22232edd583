//! `+`, `-`, `*`, `/` (spec.md §4.E.1).

use super::{check_arity_at_least, check_is_number};
use crate::errors;
use crate::value::Value;

/// Folds `args` left-to-right through `op`. A single operand under `-`
/// negates; under the others it passes through unchanged. Division by zero
/// stops the fold immediately with a Division-by-Zero Error.
pub fn op(op: &str, args: Vec<Value>) -> Value {
    let name = op;
    if let Some(e) = check_arity_at_least(name, &args, 1) {
        return e;
    }
    for i in 0..args.len() {
        if let Some(e) = check_is_number(name, &args, i) {
            return e;
        }
    }

    let mut numbers = args.into_iter().map(|v| match v {
        Value::Number(n) => n,
        _ => unreachable!("checked above"),
    });
    let first = numbers.next().expect("arity checked above");

    if op == "-" && numbers.len() == 0 {
        return Value::number(-first);
    }

    let mut acc = first;
    for n in numbers {
        acc = match op {
            "+" => acc.wrapping_add(n),
            "-" => acc.wrapping_sub(n),
            "*" => acc.wrapping_mul(n),
            "/" => {
                if n == 0 {
                    return errors::division_by_zero();
                }
                acc.wrapping_div(n)
            }
            other => unreachable!("unknown arithmetic operator {other}"),
        };
    }
    Value::number(acc)
}

//! `==`, `!=` (structural equality, any argument kinds) and `>`, `<`, `>=`,
//! `<=` (numeric ordering) — spec.md §4.E.

use super::{check_arity, check_is_number};
use crate::value::Value;

fn bool_value(b: bool) -> Value {
    Value::number(i64::from(b))
}

/// `op` is `"=="` or `"!="`.
pub fn equality(op: &str, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity(op, &args, 2) {
        return e;
    }
    let b = args.remove(1);
    let a = args.remove(0);
    let equal = a.equal(&b);
    bool_value(if op == "==" { equal } else { !equal })
}

/// `op` is one of `">"`, `"<"`, `">="`, `"<="`.
pub fn order(op: &str, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity(op, &args, 2)
        .or_else(|| check_is_number(op, &args, 0))
        .or_else(|| check_is_number(op, &args, 1))
    {
        return e;
    }
    let Value::Number(b) = args.remove(1) else {
        unreachable!("checked above");
    };
    let Value::Number(a) = args.remove(0) else {
        unreachable!("checked above");
    };
    let holds = match op {
        ">" => a > b,
        "<" => a < b,
        ">=" => a >= b,
        "<=" => a <= b,
        other => unreachable!("unknown ordering operator {other}"),
    };
    bool_value(holds)
}

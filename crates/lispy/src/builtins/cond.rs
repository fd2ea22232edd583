//! `if` (spec.md §4.E): evaluates one of two `QExpr` branches depending on a
//! `Number` condition.

use super::{check_arity, check_is_number, check_is_qexpr};
use crate::context::EvalContext;
use crate::environment::SharedEnvironment;
use crate::value::Value;

pub fn if_(env: &SharedEnvironment, mut args: Vec<Value>, ctx: &mut EvalContext, depth: usize) -> Value {
    if let Some(e) = check_arity("if", &args, 3)
        .or_else(|| check_is_number("if", &args, 0))
        .or_else(|| check_is_qexpr("if", &args, 1))
        .or_else(|| check_is_qexpr("if", &args, 2))
    {
        return e;
    }

    let else_branch = args.remove(2);
    let then_branch = args.remove(1);
    let Value::Number(condition) = args.remove(0) else {
        unreachable!("checked above");
    };

    let branch = if condition != 0 { then_branch } else { else_branch };
    crate::eval::eval_with_depth(env, branch.retag_to_sexpr(), ctx, depth + 1)
}

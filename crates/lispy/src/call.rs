//! The Call Protocol (spec.md §4.F): applies a [`Function`] to a list of
//! already-evaluated argument `Value`s.

use crate::context::EvalContext;
use crate::environment::SharedEnvironment;
use crate::errors;
use crate::value::{Function, Lambda, Value, VARIADIC_MARKER};

pub(crate) fn apply(
    caller_env: &SharedEnvironment,
    func: Function,
    args: Vec<Value>,
    ctx: &mut EvalContext,
    depth: usize,
) -> Value {
    match func {
        Function::Builtin(b) => crate::builtins::call(b, caller_env, args, ctx, depth),
        Function::Lambda(lambda) => apply_lambda(caller_env, lambda, args, ctx, depth),
    }
}

/// Binds `args` against `lambda.formals` one at a time, honoring the `&`
/// variadic marker, and either completes the call (all formals bound) or
/// returns a partially-applied copy of the lambda (spec.md §4.F).
fn apply_lambda(caller_env: &SharedEnvironment, mut lambda: Lambda, args: Vec<Value>, ctx: &mut EvalContext, depth: usize) -> Value {
    let total_formals = lambda.formals.len();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if lambda.formals.is_empty() {
            let remaining = 1 + args.count();
            return errors::too_many_arguments(total_formals + remaining, total_formals);
        }

        let formal = lambda.formals.remove(0);
        let Value::Symbol(name) = formal else {
            return errors::formals_must_be_symbols();
        };

        if name == VARIADIC_MARKER {
            // The next formal (there must be exactly one) binds to a QExpr
            // of every remaining argument, `arg` included.
            if lambda.formals.len() != 1 {
                return errors::invalid_formals_format();
            }
            let variadic_name = lambda.formals.remove(0);
            let Value::Symbol(variadic_name) = variadic_name else {
                return errors::formals_must_be_symbols();
            };
            let mut rest = vec![arg];
            rest.extend(args);
            lambda.env.put(&variadic_name, &Value::qexpr(rest));
            break;
        }

        lambda.env.put(&name, &arg);
    }

    // A trailing `&` with no argument left to supply it: bind it to the
    // empty list so the call can still complete (spec.md §4.F edge case).
    // Exactly one formal must follow the marker, same as the in-loop case.
    if matches!(lambda.formals.first(), Some(Value::Symbol(s)) if s == VARIADIC_MARKER) {
        lambda.formals.remove(0);
        if lambda.formals.len() != 1 {
            return errors::invalid_formals_format();
        }
        let Some(Value::Symbol(variadic_name)) = lambda.formals.first().cloned() else {
            return errors::invalid_formals_format();
        };
        lambda.formals.remove(0);
        lambda.env.put(&variadic_name, &Value::qexpr(vec![]));
    }

    if !lambda.formals.is_empty() {
        // Still partially applied: return a deep-cloned lambda so later
        // mutation of this copy's frame never aliases the original's.
        return Value::Function(Function::Lambda(lambda)).deep_clone();
    }

    // Fully applied: the body evaluates in the lambda's own environment,
    // whose parent is now set to the caller's (spec.md §4.F "completion").
    lambda.env.set_parent(caller_env.clone());
    crate::eval::eval_with_depth(&lambda.env, Value::SExpr(lambda.body), ctx, depth + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;
    use crate::environment::Environment;
    use crate::eval::eval;

    fn env() -> SharedEnvironment {
        builtins::register_all(Environment::new_shared())
    }

    #[test]
    fn full_application_evaluates_body() {
        let e = env();
        let lambda = Value::sexpr(vec![
            Value::symbol("\\"),
            Value::qexpr(vec![Value::symbol("x"), Value::symbol("y")]),
            Value::qexpr(vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")]),
        ]);
        let call = Value::sexpr(vec![lambda, Value::number(2), Value::number(3)]);
        assert!(eval(&e, call).equal(&Value::number(5)));
    }

    #[test]
    fn partial_application_returns_a_lambda() {
        let e = env();
        let lambda = Value::sexpr(vec![
            Value::symbol("\\"),
            Value::qexpr(vec![Value::symbol("x"), Value::symbol("y")]),
            Value::qexpr(vec![Value::symbol("+"), Value::symbol("x"), Value::symbol("y")]),
        ]);
        let call = Value::sexpr(vec![lambda, Value::number(2)]);
        let result = eval(&e, call);
        assert!(matches!(result, Value::Function(Function::Lambda(_))));
    }

    #[test]
    fn variadic_binds_remaining_as_qexpr() {
        let e = env();
        let lambda = Value::sexpr(vec![
            Value::symbol("\\"),
            Value::qexpr(vec![Value::symbol("x"), Value::symbol("&"), Value::symbol("rest")]),
            Value::qexpr(vec![Value::symbol("rest")]),
        ]);
        let call = Value::sexpr(vec![lambda, Value::number(1), Value::number(2), Value::number(3)]);
        let result = eval(&e, call);
        assert!(result.equal(&Value::qexpr(vec![Value::number(2), Value::number(3)])));
    }

    #[test]
    fn trailing_variadic_binds_empty_list() {
        let e = env();
        let lambda = Value::sexpr(vec![
            Value::symbol("\\"),
            Value::qexpr(vec![Value::symbol("x"), Value::symbol("&"), Value::symbol("rest")]),
            Value::qexpr(vec![Value::symbol("rest")]),
        ]);
        let call = Value::sexpr(vec![lambda, Value::number(1)]);
        let result = eval(&e, call);
        assert!(result.equal(&Value::qexpr(vec![])));
    }

    #[test]
    fn variadic_marker_followed_by_more_than_one_formal_is_an_error() {
        let e = env();
        // Bypasses the `\` constructor's own validation to exercise the
        // call-time check directly: `{x & y z}` has two formals after `&`.
        let lambda = Value::lambda(
            vec![Value::symbol("x"), Value::symbol("&"), Value::symbol("y"), Value::symbol("z")],
            vec![Value::symbol("y")],
            Environment::new_shared(),
        );
        let call = Value::sexpr(vec![lambda, Value::number(1)]);
        assert!(eval(&e, call).is_error());
    }

    #[test]
    fn too_many_arguments_is_an_error() {
        let e = env();
        let lambda = Value::sexpr(vec![
            Value::symbol("\\"),
            Value::qexpr(vec![Value::symbol("x")]),
            Value::qexpr(vec![Value::symbol("x")]),
        ]);
        let call = Value::sexpr(vec![lambda, Value::number(1), Value::number(2)]);
        assert!(eval(&e, call).is_error());
    }
}

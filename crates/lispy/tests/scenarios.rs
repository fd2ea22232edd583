//! Integration tests exercising complete evaluation scenarios end to end,
//! building `Value` trees directly (no concrete parser lives in this
//! crate — see `lispy-cli` for that boundary).

use pretty_assertions::assert_eq;

use lispy::{Value, eval, global_environment};

fn sexpr(children: Vec<Value>) -> Value {
    Value::sexpr(children)
}

fn qexpr(children: Vec<Value>) -> Value {
    Value::qexpr(children)
}

fn sym(s: &str) -> Value {
    Value::symbol(s)
}

fn num(n: i64) -> Value {
    Value::number(n)
}

#[test]
fn sum_of_three() {
    let env = global_environment();
    let expr = sexpr(vec![sym("+"), num(1), num(2), num(3)]);
    assert_eq!(eval(&env, expr).to_string(), "6");
}

#[test]
fn unary_minus_negates() {
    let env = global_environment();
    let expr = sexpr(vec![sym("-"), num(10)]);
    assert_eq!(eval(&env, expr).to_string(), "-10");
}

#[test]
fn division_by_zero_prints_as_error() {
    let env = global_environment();
    let expr = sexpr(vec![sym("/"), num(10), num(0)]);
    assert_eq!(eval(&env, expr).to_string(), "Error: Division by zero");
}

#[test]
fn eval_of_head_of_qexpr_of_sexprs() {
    let env = global_environment();
    let inner = qexpr(vec![
        sexpr(vec![sym("+"), num(1), num(2)]),
        sexpr(vec![sym("+"), num(10), num(20)]),
    ]);
    let expr = sexpr(vec![sym("eval"), sexpr(vec![sym("head"), inner])]);
    assert_eq!(eval(&env, expr).to_string(), "3");
}

#[test]
fn def_lambda_then_call_it() {
    let env = global_environment();
    let define = sexpr(vec![
        sym("def"),
        qexpr(vec![sym("add-mul")]),
        sexpr(vec![
            sym("\\"),
            qexpr(vec![sym("x"), sym("y")]),
            qexpr(vec![sym("+"), sym("x"), sexpr(vec![sym("*"), sym("x"), sym("y")])]),
        ]),
    ]);
    assert_eq!(eval(&env, define).to_string(), "()");

    let call = sexpr(vec![sym("add-mul"), num(10), num(20)]);
    assert_eq!(eval(&env, call).to_string(), "210");
}

#[test]
fn variadic_lambda_collects_remaining_args() {
    let env = global_environment();
    let define = sexpr(vec![
        sym("def"),
        qexpr(vec![sym("f")]),
        sexpr(vec![sym("\\"), qexpr(vec![sym("&"), sym("xs")]), qexpr(vec![sym("xs")])]),
    ]);
    assert_eq!(eval(&env, define).to_string(), "()");

    let call = sexpr(vec![sym("f"), num(1), num(2), num(3)]);
    assert_eq!(eval(&env, call).to_string(), "{1 2 3}");
}

#[test]
fn if_takes_the_then_branch_on_equality() {
    let env = global_environment();
    let expr = sexpr(vec![
        sym("if"),
        sexpr(vec![sym("=="), num(1), num(1)]),
        qexpr(vec![sym("+"), num(1), num(1)]),
        qexpr(vec![sym("+"), num(2), num(2)]),
    ]);
    assert_eq!(eval(&env, expr).to_string(), "2");
}

#[test]
fn equality_on_qexprs_is_structural() {
    let env = global_environment();
    let expr = sexpr(vec![
        sym("=="),
        qexpr(vec![num(1), num(2), num(3)]),
        qexpr(vec![num(1), num(2), num(3)]),
    ]);
    assert_eq!(eval(&env, expr).to_string(), "1");
}

/// Property 1 (§8): inert forms evaluate to themselves.
#[test]
fn property_evaluator_idempotence_on_inert_forms() {
    let env = global_environment();
    for v in [num(42), Value::string("hi"), qexpr(vec![num(1), sym("x")])] {
        assert!(eval(&env, v.deep_clone()).equal(&v));
    }
}

/// Property 3 (§8): `join(head(q), tail(q)) ≡ q` for non-empty `q`.
#[test]
fn property_list_laws() {
    let env = global_environment();
    let q = qexpr(vec![num(1), num(2), num(3)]);
    let expr = sexpr(vec![
        sym("join"),
        sexpr(vec![sym("head"), q.deep_clone()]),
        sexpr(vec![sym("tail"), q.deep_clone()]),
    ]);
    assert!(eval(&env, expr).equal(&q));
}

/// Property 4 (§8): `(- 0 (+ xs…)) ≡ (- (+ xs…))` when unary.
#[test]
fn property_arithmetic_identity() {
    let env = global_environment();
    let sum_a = sexpr(vec![sym("+"), num(1), num(2), num(3)]);
    let lhs = sexpr(vec![sym("-"), num(0), sum_a]);
    let sum_b = sexpr(vec![sym("+"), num(1), num(2), num(3)]);
    let rhs = sexpr(vec![sym("-"), sum_b]);
    assert!(eval(&env, lhs).equal(&eval(&env, rhs)));
}

/// Property 5 (§8): root `def` is globally visible; local `=` inside a
/// lambda body does not alter the root binding.
#[test]
fn property_scoping() {
    let env = global_environment();
    eval(&env, sexpr(vec![sym("def"), qexpr(vec![sym("x")]), num(1)]));
    assert_eq!(env.get("x").to_string(), "1");

    // A zero-argument SExpr would unary-fold back to the lambda value
    // without invoking it (spec.md §4.D.1 step 4), so the lambda here takes
    // one unused formal to force an actual call.
    let shadow = sexpr(vec![
        sym("\\"),
        qexpr(vec![sym("_")]),
        qexpr(vec![sym("="), qexpr(vec![sym("x")]), num(2)]),
    ]);
    let call = sexpr(vec![shadow, num(0)]);
    eval(&env, call);
    assert_eq!(env.get("x").to_string(), "1");
}

/// Property 7 (§8): a builtin is never invoked when one of its arguments is
/// an Error; the leftmost error is returned verbatim.
#[test]
fn property_error_absorbs() {
    let env = global_environment();
    let expr = sexpr(vec![sym("+"), sym("undefined-one"), sym("undefined-two")]);
    match eval(&env, expr) {
        Value::Error(msg) => assert!(msg.contains("undefined-one")),
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn load_error_on_missing_file() {
    let env = global_environment();
    let expr = sexpr(vec![sym("load"), Value::string("/no/such/file-lispy-test.lsp")]);
    assert!(eval(&env, expr).is_error());
}

#[test]
fn print_lambda_and_error_representations() {
    let env = global_environment();
    let lambda = sexpr(vec![sym("\\"), qexpr(vec![sym("x")]), qexpr(vec![sym("x")])]);
    assert_eq!(eval(&env, lambda).to_string(), "(\\ {x} {x})");

    let err = sexpr(vec![sym("error"), Value::string("boom")]);
    assert_eq!(eval(&env, err).to_string(), "Error: boom");
}

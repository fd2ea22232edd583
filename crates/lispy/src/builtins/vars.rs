//! `def` and `=` (spec.md §4.E): bind each symbol in the leading `QExpr` to
//! the corresponding subsequent argument, at global or local scope.

use super::{check_arity_at_least, check_is_qexpr};
use crate::environment::SharedEnvironment;
use crate::errors;
use crate::value::Value;

/// `name` is `"def"` (binds at the global/root scope) or `"="` (binds
/// locally); both share the same argument-checking and binding shape.
pub fn var(env: &SharedEnvironment, name: &str, mut args: Vec<Value>) -> Value {
    if let Some(e) = check_arity_at_least(name, &args, 2).or_else(|| check_is_qexpr(name, &args, 0)) {
        return e;
    }
    let Value::QExpr(symbols) = args.remove(0) else {
        unreachable!("checked above");
    };

    for symbol in &symbols {
        if !matches!(symbol, Value::Symbol(_)) {
            return errors::formals_must_be_symbols();
        }
    }

    let values = args;
    if symbols.len() != values.len() {
        return errors::wrong_arity(name, values.len(), symbols.len());
    }

    for (symbol, value) in symbols.iter().zip(&values) {
        let Value::Symbol(symbol_name) = symbol else {
            unreachable!("checked above");
        };
        if name == "def" {
            env.def(symbol_name, value);
        } else {
            env.put(symbol_name, value);
        }
    }
    Value::empty_sexpr()
}

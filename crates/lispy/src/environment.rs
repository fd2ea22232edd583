//! Lexical environment: symbol name to [`Value`] binding, with a parent link
//! forming a chain toward the global environment (spec.md §3.2, §4.B).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

/// How deeply `eval` may recurse before giving up with a `Value::Error`,
/// guarding against stack exhaustion (SPEC_FULL.md §11). Not tail-call
/// optimization and not a bound on value size — just a depth counter on the
/// evaluator's own recursion, mirroring the shape of the teacher's resource
/// tracker at a scale appropriate to a tree-walker.
#[derive(Debug, Clone, Copy)]
pub struct EvalLimits {
    pub max_depth: usize,
}

impl Default for EvalLimits {
    fn default() -> Self {
        Self { max_depth: 10_000 }
    }
}

/// An environment's bindings and its (non-owning, shared) parent link.
///
/// Destroying an `Environment` destroys its bindings (ordinary `Drop`) but
/// never its parent — the parent is an `Rc`, so it only goes away once
/// every environment sharing it does.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    parent: Option<SharedEnvironment>,
}

/// A reference-counted handle to an [`Environment`].
///
/// Environments are shared this way so that a lambda's captured environment
/// can have its parent link assigned at call time (§4.F) to point at the
/// *caller's* environment without copying it, and so nested evaluation can
/// walk the same chain multiple callers are holding onto. The sharing is
/// exactly what spec.md §4.B calls out: "the parent pointer is copied by
/// reference (shared, non-owning)". A lambda's *own* bindings are never
/// shared this way — see [`Environment::deep_clone`].
#[derive(Debug, Clone)]
pub struct SharedEnvironment(Rc<RefCell<Environment>>);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> SharedEnvironment {
        SharedEnvironment(Rc::new(RefCell::new(Self::new())))
    }

    /// Deep-copies this environment's own bindings into a fresh map; the
    /// parent link is copied by reference (spec.md §4.B `copy`).
    pub fn deep_clone(&self) -> Self {
        Self {
            bindings: self.bindings.iter().map(|(k, v)| (k.clone(), v.deep_clone())).collect(),
            parent: self.parent.clone(),
        }
    }
}

impl SharedEnvironment {
    pub(crate) fn inner(&self) -> &Rc<RefCell<Environment>> {
        &self.0
    }

    /// Creates a fresh child environment whose parent is `self`.
    pub fn child(&self) -> SharedEnvironment {
        SharedEnvironment(Rc::new(RefCell::new(Environment {
            bindings: HashMap::new(),
            parent: Some(self.clone()),
        })))
    }

    /// Deep-copies the pointed-to environment into a brand-new, independent
    /// `SharedEnvironment` (used when deep-cloning a `Lambda`'s captured
    /// environment, spec.md §9).
    pub fn deep_clone_shared(&self) -> SharedEnvironment {
        SharedEnvironment(Rc::new(RefCell::new(self.0.borrow().deep_clone())))
    }

    /// Scans local bindings, then recurses into the parent (§4.B `get`).
    /// Ties between levels resolve to the nearest (innermost) binding since
    /// the local map is always checked before recursing.
    pub fn get(&self, name: &str) -> Value {
        let parent = {
            let env = self.0.borrow();
            if let Some(v) = env.bindings.get(name) {
                return v.deep_clone();
            }
            env.parent.clone()
        };
        match parent {
            Some(p) => p.get(name),
            None => crate::errors::unbound_symbol(name),
        }
    }

    /// Local insert-or-replace; the previous value (if any) is dropped when
    /// the map entry is overwritten (§4.B `put`).
    pub fn put(&self, name: &str, value: &Value) {
        self.0.borrow_mut().bindings.insert(name.to_owned(), value.deep_clone());
    }

    /// Walks to the root environment and `put`s there (§4.B `def`).
    pub fn def(&self, name: &str, value: &Value) {
        let mut current = self.clone();
        loop {
            let parent = current.0.borrow().parent.clone();
            match parent {
                Some(p) => current = p,
                None => break,
            }
        }
        current.put(name, value);
    }

    /// Returns the parent this environment's chain points at, if any.
    pub fn parent(&self) -> Option<SharedEnvironment> {
        self.0.borrow().parent.clone()
    }

    /// Sets this environment's parent link. Used by the call protocol
    /// (§4.F) to point a lambda's captured environment at its caller's
    /// environment once the lambda is fully applied.
    pub fn set_parent(&self, parent: SharedEnvironment) {
        self.0.borrow_mut().parent = Some(parent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_misses_all_the_way_to_root_error() {
        let env = Environment::new_shared();
        let v = env.get("x");
        assert!(v.is_error());
    }

    #[test]
    fn def_at_child_is_visible_from_sibling_via_root() {
        let root = Environment::new_shared();
        let child_a = root.child();
        let child_b = root.child();
        child_a.def("x", &Value::number(1));
        assert!(child_b.get("x").equal(&Value::number(1)));
    }

    #[test]
    fn put_is_local_only() {
        let root = Environment::new_shared();
        let child = root.child();
        child.put("x", &Value::number(1));
        assert!(root.get("x").is_error());
        assert!(child.get("x").equal(&Value::number(1)));
    }

    #[test]
    fn nearest_binding_wins_on_shadowing() {
        let root = Environment::new_shared();
        root.def("x", &Value::number(1));
        let child = root.child();
        child.put("x", &Value::number(2));
        assert!(child.get("x").equal(&Value::number(2)));
        assert!(root.get("x").equal(&Value::number(1)));
    }
}

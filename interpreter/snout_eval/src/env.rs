//! Lexical environments.
//!
//! An environment is an owned name-to-value map plus an optional handle
//! to the enclosing scope. Closures capture the handle, not a copy, so
//! every function defined in a scope observes later rebindings there.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

#[derive(Debug, Default)]
struct Environment {
    store: FxHashMap<String, Value>,
    outer: Option<Env>,
}

/// Shared handle to one scope. Cloning aliases the scope; it never
/// copies the bindings.
#[derive(Clone, Debug, Default)]
pub struct Env(Rc<RefCell<Environment>>);

impl Env {
    /// A fresh top-level scope.
    pub fn new() -> Self {
        Env::default()
    }

    /// A scope nested inside `outer`, used for function application.
    pub fn enclosed(outer: &Env) -> Self {
        Env(Rc::new(RefCell::new(Environment {
            store: FxHashMap::default(),
            outer: Some(outer.clone()),
        })))
    }

    /// Resolve a name, walking outward through the scope chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let env = self.0.borrow();
        match env.store.get(name) {
            Some(value) => Some(value.clone()),
            None => env.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Bind a name in this scope, shadowing any outer binding.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }

    /// Whether two handles alias the same scope.
    pub fn ptr_eq(a: &Env, b: &Env) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

//! Runtime values.
//!
//! The value set is closed: one enum, one variant per runtime type, so
//! the evaluator, the render path, and hash-key derivation are all
//! exhaustively checked. Heap-backed variants (strings, functions,
//! arrays, hashes) share their payload through `Rc`; cloning a `Value`
//! is always cheap.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHasher};
use snout_ir::Block;

use crate::env::Env;
use crate::render::RenderHook;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(Rc<str>),
    Null,
    Function(Rc<FunctionValue>),
    Builtin(crate::Builtin),
    Array(Rc<Vec<Value>>),
    Hash(Rc<HashValue>),
}

impl Value {
    pub fn str(value: impl Into<Rc<str>>) -> Value {
        Value::Str(value.into())
    }

    /// Runtime type label, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Bool(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
        }
    }

    /// Truthiness rule: only `false` and `null` are falsy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    /// Render the value for display.
    ///
    /// Fixed labels (booleans, `null`, the function keyword) and string
    /// contents pass through the hook; structure and numbers do not.
    pub fn inspect(&self, hook: &dyn RenderHook) -> String {
        match self {
            Value::Int(value) => value.to_string(),
            Value::Bool(true) => hook.render("true"),
            Value::Bool(false) => hook.render("false"),
            Value::Str(value) => hook.render(value),
            Value::Null => hook.render("null"),
            Value::Function(function) => function.inspect(hook),
            Value::Builtin(_) => hook.render("builtin function"),
            Value::Array(elements) => {
                let rendered: Vec<String> =
                    elements.iter().map(|element| element.inspect(hook)).collect();
                format!("[{}]", rendered.join(", "))
            }
            Value::Hash(hash) => {
                let rendered: Vec<String> = hash
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key.inspect(hook), value.inspect(hook)))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
        }
    }
}

/// Structural equality for tests and hash-value comparison. Language-level
/// `==` lives in the operator module and is not this.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a.pairs == b.pairs,
            _ => false,
        }
    }
}

/// A user-defined function: parameter names, body, and the environment
/// captured at the definition site.
#[derive(Clone)]
pub struct FunctionValue {
    pub params: Vec<String>,
    pub body: Block,
    pub env: Env,
}

impl FunctionValue {
    fn inspect(&self, hook: &dyn RenderHook) -> String {
        format!(
            "{}({}) {{\n{}\n}}",
            hook.render("function"),
            self.params.join(", "),
            self.body
        )
    }
}

// The captured environment can reach back to this function through a
// closure cycle, so Debug must not descend into it.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params)
            .field("body", &self.body.to_string())
            .finish_non_exhaustive()
    }
}

/// Derived key for hash storage. Only integers, booleans, and strings
/// qualify; strings are keyed by a 64-bit content hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashKey {
    Int(i64),
    Bool(bool),
    Str(u64),
}

impl HashKey {
    /// Derive the key for a value, or `None` when the type is unhashable.
    pub fn of(value: &Value) -> Option<HashKey> {
        match value {
            Value::Int(v) => Some(HashKey::Int(*v)),
            Value::Bool(v) => Some(HashKey::Bool(*v)),
            Value::Str(v) => {
                let mut hasher = FxHasher::default();
                v.hash(&mut hasher);
                Some(HashKey::Str(hasher.finish()))
            }
            _ => None,
        }
    }
}

/// Hash payload: pairs in insertion order plus a derived-key index.
///
/// Insertion order makes rendering deterministic; the index keeps lookup
/// constant-time. Re-inserting an existing key overwrites the value in
/// place and keeps the original position.
#[derive(Debug, Default)]
pub struct HashValue {
    pairs: Vec<(Value, Value)>,
    index: FxHashMap<HashKey, usize>,
}

impl HashValue {
    pub fn with_capacity(capacity: usize) -> Self {
        HashValue {
            pairs: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, derived: HashKey, key: Value, value: Value) {
        if let Some(&slot) = self.index.get(&derived) {
            self.pairs[slot] = (key, value);
        } else {
            self.index.insert(derived, self.pairs.len());
            self.pairs.push((key, value));
        }
    }

    pub fn get(&self, derived: &HashKey) -> Option<&Value> {
        self.index.get(derived).map(|&slot| &self.pairs[slot].1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)> {
        self.pairs.iter()
    }
}

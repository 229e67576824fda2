//! Caller-supplied argument collections

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

/// Fully resolved, position-ordered argument list, ready for invocation.
///
/// Must hold exactly one entry per declared parameter before an invocation
/// is attempted.
pub type ResolvedArguments = Vec<Value>;

/// Value Object: Caller-Supplied Arguments
///
/// Two kinds of keys coexist in one map: named entries (string key) match
/// parameters by name, and positional entries (numeric key) fill parameters
/// left unresolved after named, default, and type-based resolution.
/// Positional entries are consumed in ascending key order regardless of
/// insertion order.
///
/// ## Example
///
/// ```rust
/// use cbx_domain::{ArgumentMap, Value};
///
/// let args = ArgumentMap::new()
///     .with_named("name", Value::new("callbox".to_string()))
///     .with_positional(1, Value::new(2_i64))
///     .with_positional(0, Value::new(1_i64));
///
/// assert!(args.contains_name("name"));
/// let ordered: Vec<&Value> = args.positional_values().collect();
/// assert_eq!(ordered[0].downcast_ref::<i64>(), Some(&1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentMap {
    /// Entries keyed by parameter name
    named: HashMap<String, Value>,
    /// Entries keyed by numeric index, iterated in ascending key order
    positional: BTreeMap<usize, Value>,
}

impl ArgumentMap {
    /// Create an empty argument map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named entry (builder style)
    pub fn with_named(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert_named(name, value);
        self
    }

    /// Add a positional entry (builder style)
    pub fn with_positional(mut self, index: usize, value: Value) -> Self {
        self.insert_positional(index, value);
        self
    }

    /// Insert a named entry, replacing any previous value under `name`
    pub fn insert_named(&mut self, name: impl Into<String>, value: Value) {
        self.named.insert(name.into(), value);
    }

    /// Insert a positional entry, replacing any previous value under `index`
    pub fn insert_positional(&mut self, index: usize, value: Value) {
        self.positional.insert(index, value);
    }

    /// Named entry for `name`, if present
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Whether a named entry exists for `name`
    pub fn contains_name(&self, name: &str) -> bool {
        self.named.contains_key(name)
    }

    /// Positional entries in ascending key order
    pub fn positional_values(&self) -> impl Iterator<Item = &Value> {
        self.positional.values()
    }

    /// Number of positional entries
    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    /// Whether the map holds no entries of either kind
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}

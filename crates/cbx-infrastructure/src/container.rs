//! In-memory container

use std::collections::HashMap;

use cbx_domain::Value;
use cbx_domain::error::{Error, Result};
use cbx_domain::ports::Container;

/// In-memory reference [`Container`] backed by a `HashMap`.
///
/// Entries are registered up front, builder style, and only read during
/// resolution. Lookups are strict per the port contract: `get` for an
/// absent key fails with `EntryNotFound`.
///
/// ## Example
///
/// ```rust
/// use cbx_domain::{Container, Value};
/// use cbx_infrastructure::MapContainer;
///
/// let container = MapContainer::new()
///     .with("greeting", Value::new("hello".to_string()));
/// assert!(container.has("greeting"));
/// assert!(container.get("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapContainer {
    entries: HashMap<String, Value>,
}

impl MapContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entry (builder style)
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    /// Register an entry, replacing any previous value under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the container holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Container for MapContainer {
    fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn get(&self, key: &str) -> Result<Value> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| Error::EntryNotFound {
                key: key.to_string(),
            })
    }
}

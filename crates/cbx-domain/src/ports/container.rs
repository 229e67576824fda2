//! Container lookup port

use crate::error::Result;
use crate::value::Value;

/// Key-to-value lookup service used for dependency resolution.
///
/// The container is owned by the hosting application and only read by the
/// resolution core. Lookups are strict: `get` fails with
/// [`Error::EntryNotFound`](crate::error::Error::EntryNotFound) for an
/// absent key instead of filling silently, so a metadata-declared key that
/// is missing aborts the whole resolution request.
pub trait Container: Send + Sync {
    /// Whether an entry exists under `key`
    fn has(&self, key: &str) -> bool;

    /// Fetch the entry under `key`
    fn get(&self, key: &str) -> Result<Value>;
}

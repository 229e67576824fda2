//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CallBox resolution operations
///
/// Every failure is fatal to the single resolution request it occurred in;
/// nothing is retried and no partial argument list ever reaches an
/// invocation.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter declares a type but the container has no entry for it
    #[error("no provider for parameter type '{type_name}'")]
    MissingProvider {
        /// The declared type name that had no container entry
        type_name: String,
    },

    /// Fewer positional arguments than unresolved positional parameters
    #[error(
        "argument count mismatch: {pending} positional parameter(s) pending, {available} positional argument(s) available"
    )]
    ArgumentCountMismatch {
        /// Parameters left unresolved after named/default/type resolution
        pending: usize,
        /// Positional entries supplied by the caller
        available: usize,
    },

    /// Strict container lookup failed for a key
    #[error("container entry not found: '{key}'")]
    EntryNotFound {
        /// The key that was absent from the container
        key: String,
    },

    /// An inject target was asked to assign a field it does not declare
    #[error("type '{type_name}' declares no field named '{field}'")]
    UnknownField {
        /// Name of the target type
        type_name: String,
        /// The undeclared field name
        field: String,
    },

    /// Registry lookup miss for a named descriptor
    #[error("no {kind} registered under '{name}'")]
    NotRegistered {
        /// Kind of descriptor, e.g. "function" or "type"
        kind: &'static str,
        /// The name that was looked up
        name: String,
    },

    /// Configuration-related error
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// Failure raised by an invoked function or constructor body
    #[error("invocation failed: {message}")]
    Invocation {
        /// Description of the invocation failure
        message: String,
    },

    /// Generic error from external sources
    #[error("Generic error: {0}")]
    Generic(#[from] Box<dyn std::error::Error + Send + Sync>),
}

//! Domain Value Objects
//!
//! Immutable value objects describing callable signatures and
//! caller-supplied arguments.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ParameterSpec`] | Structural description of one declared parameter |
//! | [`ArgumentMap`] | Caller-supplied named and positional argument entries |
//! | [`ResolvedArguments`] | Position-ordered argument list ready for invocation |

/// Caller-supplied argument collections
pub mod arguments;
/// Parameter signature descriptions
pub mod parameter;

// Re-export commonly used value objects
pub use arguments::{ArgumentMap, ResolvedArguments};
pub use parameter::ParameterSpec;

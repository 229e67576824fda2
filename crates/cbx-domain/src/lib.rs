//! # CallBox Domain
//!
//! Core types for the CallBox dependency injection helper: the dynamic
//! [`Value`] currency, the value objects describing signatures and
//! caller-supplied arguments, the port traits implemented by hosting
//! applications, and the error taxonomy.
//!
//! ## Architecture
//!
//! Ports follow the Dependency Inversion Principle: this crate defines the
//! boundary contracts (container lookup, declarative metadata, signature
//! introspection and invocation), and outer layers implement them. The
//! resolution use cases live in `cbx-application`; reference implementations
//! of the ports live in `cbx-infrastructure`.

/// Error handling types
pub mod error;
/// Boundary contracts implemented by hosting applications
pub mod ports;
/// Dynamically typed injectable value
pub mod value;
/// Signature and argument value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    Container, InjectTarget, Instantiable, Invokable, MetadataProvider, MethodRef,
    NullMetadataProvider,
};
pub use value::Value;
pub use value_objects::{ArgumentMap, ParameterSpec, ResolvedArguments};

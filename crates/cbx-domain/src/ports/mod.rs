//! Domain Port Interfaces
//!
//! Boundary contracts between the resolution core and the hosting
//! application. Ports follow the Dependency Inversion Principle: the domain
//! defines the interfaces and outer layers implement them.
//!
//! ## Organization
//!
//! - **container** - key-to-value lookup used for dependency resolution
//! - **metadata** - declarative container-key metadata for fields and methods
//! - **invocation** - signature introspection and invocation capabilities

/// Container lookup port
pub mod container;
/// Signature introspection and invocation ports
pub mod invocation;
/// Declarative injection metadata port
pub mod metadata;

// Re-export commonly used port traits for convenience
pub use container::Container;
pub use invocation::{InjectTarget, Instantiable, Invokable, MethodRef};
pub use metadata::{MetadataProvider, NullMetadataProvider};

//! Infrastructure Layer - CallBox
//!
//! Concrete collaborators a hosting application can plug into the
//! resolution core: an in-memory container, registration-table descriptors
//! for callables and constructible types, a declarative metadata registry
//! with a layered configuration loader, and logging setup.
//!
//! Hosting applications with their own service container, metadata source,
//! or invocation machinery implement the `cbx-domain` ports directly; the
//! implementations here are reference-quality defaults.

/// Layered metadata configuration loading
pub mod config;
/// In-memory container
pub mod container;
/// Structured logging with tracing
pub mod logging;
/// Registration-table descriptors and registries
pub mod registry;

pub use config::{METADATA_ENV_PREFIX, MetadataLoader};
pub use container::MapContainer;
pub use logging::{LoggingConfig, init_logging, parse_log_level};
pub use registry::{
    FunctionBuilder, FunctionDef, FunctionRegistry, MetadataRegistry, TypeBuilder, TypeDef,
    TypeRegistry,
};

//! # CallBox
//!
//! Container-backed argument resolution: given a container mapping string
//! keys to values, CallBox resolves the concrete arguments needed to invoke
//! a function, call a method, or construct an object, pulling missing
//! arguments from the container by declared type or from declarative
//! metadata.
//!
//! ## Resolution policy
//!
//! Per parameter, in declared order: a caller-supplied named argument wins,
//! then a declared default, then a container lookup under the declared type
//! name; anything else is filled from positional arguments in ascending key
//! order. Defaults are never overridden by container auto-wiring.
//!
//! ## Example
//!
//! ```rust
//! use cbx::application::Injector;
//! use cbx::domain::{ArgumentMap, Value};
//! use cbx::infrastructure::{FunctionDef, MapContainer};
//! use std::sync::Arc;
//!
//! let container = MapContainer::new().with("Greeter", Value::new("hello".to_string()));
//! let injector = Injector::without_metadata(Arc::new(container));
//!
//! let greet = FunctionDef::builder("greet")
//!     .param_typed("greeting", "Greeter")
//!     .param("name")
//!     .body(|args| {
//!         let greeting = args[0].downcast_ref::<String>().cloned().unwrap_or_default();
//!         let name = args[1].downcast_ref::<String>().cloned().unwrap_or_default();
//!         Ok(Value::new(format!("{greeting}, {name}")))
//!     });
//!
//! let args = ArgumentMap::new().with_positional(0, Value::new("callbox".to_string()));
//! let result = injector.call(&greet, &args).unwrap();
//! assert_eq!(result.downcast_ref::<String>().map(String::as_str), Some("hello, callbox"));
//! ```
//!
//! ## Architecture
//!
//! The codebase follows Clean Architecture principles:
//!
//! - `domain` - value objects, port traits, and error types
//! - `application` - the resolution use cases and the [`application::Injector`] facade
//! - `infrastructure` - reference port implementations, config, and logging

/// Domain layer - value objects, ports, and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use cbx_domain::*;
}

/// Application layer - resolution use cases
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use cbx_application::*;
}

/// Infrastructure layer - port implementations, config, and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use cbx_infrastructure::*;
}

// Flat re-exports of the types nearly every host touches
pub use cbx_application::Injector;
pub use cbx_domain::{ArgumentMap, Error, ParameterSpec, Result, Value};

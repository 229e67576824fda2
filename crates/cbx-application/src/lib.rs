//! Application Layer - CallBox
//!
//! This crate contains the resolution use cases of CallBox, orchestrating
//! the domain ports according to Clean Architecture principles.
//!
//! ## Use Cases
//!
//! - [`ParameterResolver`] - the core per-parameter resolution policy
//! - [`CallableResolver`] - resolve arguments for a callable and invoke it
//! - [`ConstructResolver`] - resolve initializer arguments and construct
//! - [`PropertyInjector`] - populate metadata-declared fields from the container
//! - [`Injector`] - thin facade bundling the four use cases
//!
//! ## Dependencies
//!
//! This crate depends only on `cbx-domain` for value objects, port traits,
//! and error types; concrete port implementations live in
//! `cbx-infrastructure` or in the hosting application.

pub mod use_cases;

pub use use_cases::*;

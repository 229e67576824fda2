//! Resolution Use Cases
//!
//! Application services implementing the resolution pipeline. The
//! [`ParameterResolver`] holds the only real decision logic; the invocation
//! resolvers and the property injector are thin orchestration over the
//! domain ports.

/// Resolve-and-invoke for functions and bound methods
pub mod callable_resolver;
/// Resolve-and-construct for described types
pub mod construct_resolver;
/// Facade bundling the resolution use cases
pub mod injector;
/// The core per-parameter resolution policy
pub mod parameter_resolver;
/// Metadata-driven field population
pub mod property_injector;

pub use callable_resolver::CallableResolver;
pub use construct_resolver::ConstructResolver;
pub use injector::Injector;
pub use parameter_resolver::ParameterResolver;
pub use property_injector::PropertyInjector;

//! Construction Use Case
//!
//! Resolves initializer arguments for a described type and constructs an
//! instance.

use std::sync::Arc;

use cbx_domain::Value;
use cbx_domain::error::Result;
use cbx_domain::ports::{Container, Instantiable};
use cbx_domain::value_objects::ArgumentMap;
use tracing::debug;

use crate::use_cases::ParameterResolver;

/// Resolves and constructs an instance of a described type.
///
/// A type with no declared initializer is constructed with zero arguments;
/// otherwise the initializer parameters are resolved exactly like a
/// callable's, minus method-level metadata merging (initializers carry no
/// such metadata in this design).
pub struct ConstructResolver {
    parameter_resolver: ParameterResolver,
}

impl ConstructResolver {
    /// Create a resolver reading from `container`
    pub fn new(container: Arc<dyn Container>) -> Self {
        Self {
            parameter_resolver: ParameterResolver::new(container),
        }
    }

    /// Resolve initializer arguments for `target` and construct an instance
    pub fn resolve_construct(
        &self,
        target: &dyn Instantiable,
        provided: &ArgumentMap,
    ) -> Result<Value> {
        let arguments = match target.initializer() {
            None => Vec::new(),
            Some(parameters) => self.parameter_resolver.resolve(parameters, provided)?,
        };
        debug!(
            type_name = %target.type_name(),
            arguments = arguments.len(),
            "constructing instance"
        );
        target.instantiate(arguments)
    }
}

//! Callable Invocation Use Case
//!
//! Resolves the argument list for a function or bound method and invokes
//! it, delegating all argument computation to the [`ParameterResolver`].

use std::sync::Arc;

use cbx_domain::Value;
use cbx_domain::error::Result;
use cbx_domain::ports::{Container, Invokable, MetadataProvider};
use cbx_domain::value_objects::ArgumentMap;
use tracing::debug;

use crate::use_cases::ParameterResolver;

/// Resolves and invokes a function or bound method.
///
/// If the callable carries a metadata target and the metadata provider
/// declares parameter keys for it, each key is looked up in the container
/// and merged as a named entry *under* the caller-supplied arguments:
/// callers win on collision, and the container is not consulted at all for
/// an overridden key. Errors raised by the invoked body propagate
/// unmodified.
pub struct CallableResolver {
    container: Arc<dyn Container>,
    metadata: Arc<dyn MetadataProvider>,
    parameter_resolver: ParameterResolver,
}

impl CallableResolver {
    /// Create a resolver over the given container and metadata provider
    pub fn new(container: Arc<dyn Container>, metadata: Arc<dyn MetadataProvider>) -> Self {
        let parameter_resolver = ParameterResolver::new(Arc::clone(&container));
        Self {
            container,
            metadata,
            parameter_resolver,
        }
    }

    /// Resolve arguments for `callable` and invoke it
    pub fn resolve_call(&self, callable: &dyn Invokable, provided: &ArgumentMap) -> Result<Value> {
        let arguments = self.merge_metadata(callable, provided)?;
        let resolved = self
            .parameter_resolver
            .resolve(callable.parameters(), &arguments)?;
        callable.invoke(resolved)
    }

    /// Merge method-level metadata defaults under the caller-supplied entries
    fn merge_metadata(
        &self,
        callable: &dyn Invokable,
        provided: &ArgumentMap,
    ) -> Result<ArgumentMap> {
        let Some(target) = callable.metadata_target() else {
            return Ok(provided.clone());
        };
        let Some(keys) = self
            .metadata
            .method_parameter_keys(&target.type_name, &target.method_name)
        else {
            return Ok(provided.clone());
        };

        let mut arguments = provided.clone();
        for (parameter, key) in keys {
            // Caller-supplied entries win; skip the container entirely for
            // overridden keys.
            if !arguments.contains_name(&parameter) {
                debug!(
                    method = %target.method_name,
                    parameter = %parameter,
                    key = %key,
                    "merging metadata parameter"
                );
                arguments.insert_named(parameter, self.container.get(&key)?);
            }
        }
        Ok(arguments)
    }
}

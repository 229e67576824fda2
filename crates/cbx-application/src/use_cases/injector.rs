//! Injector Facade
//!
//! Thin entry point bundling the resolution use cases behind one handle.

use std::sync::Arc;

use cbx_domain::Value;
use cbx_domain::error::Result;
use cbx_domain::ports::{
    Container, InjectTarget, Instantiable, Invokable, MetadataProvider, NullMetadataProvider,
};
use cbx_domain::value_objects::ArgumentMap;

use crate::use_cases::{CallableResolver, ConstructResolver, PropertyInjector};

/// Facade over the resolution use cases.
///
/// Holds the externally-owned container and metadata provider and delegates
/// every operation; it adds no behavior of its own. The injector keeps no
/// mutable state, so sharing one across threads is safe whenever the
/// supplied ports are.
pub struct Injector {
    container: Arc<dyn Container>,
    callable_resolver: CallableResolver,
    construct_resolver: ConstructResolver,
    property_injector: PropertyInjector,
}

impl Injector {
    /// Create an injector over the given container and metadata provider
    pub fn new(container: Arc<dyn Container>, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            callable_resolver: CallableResolver::new(Arc::clone(&container), Arc::clone(&metadata)),
            construct_resolver: ConstructResolver::new(Arc::clone(&container)),
            property_injector: PropertyInjector::new(Arc::clone(&container), metadata),
            container,
        }
    }

    /// Create an injector with no declarative metadata
    pub fn without_metadata(container: Arc<dyn Container>) -> Self {
        Self::new(container, Arc::new(NullMetadataProvider))
    }

    /// Resolve arguments for `callable` and invoke it
    pub fn call(&self, callable: &dyn Invokable, arguments: &ArgumentMap) -> Result<Value> {
        self.callable_resolver.resolve_call(callable, arguments)
    }

    /// Resolve initializer arguments for `target` and construct an instance
    pub fn instantiate(&self, target: &dyn Instantiable, arguments: &ArgumentMap) -> Result<Value> {
        self.construct_resolver.resolve_construct(target, arguments)
    }

    /// Populate the metadata-declared fields of `target` from the container
    pub fn inject_properties(&self, target: &mut dyn InjectTarget) -> Result<()> {
        self.property_injector.inject(target)
    }

    /// The externally-owned container this injector reads from
    pub fn container(&self) -> &Arc<dyn Container> {
        &self.container
    }
}

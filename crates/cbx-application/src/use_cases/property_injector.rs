//! Property Injection Use Case
//!
//! Populates metadata-declared fields of an instance from the container.

use std::sync::Arc;

use cbx_domain::error::Result;
use cbx_domain::ports::{Container, InjectTarget, MetadataProvider};
use tracing::debug;

/// Assigns container values into metadata-declared fields.
///
/// For every declared field of the target's type, the metadata provider is
/// asked for a container key; when one is declared the value is fetched
/// (strictly, so an absent key aborts the whole call) and assigned through
/// the target's field-access capability. Fields without metadata are left
/// untouched, which makes injection idempotent under a stable container.
pub struct PropertyInjector {
    container: Arc<dyn Container>,
    metadata: Arc<dyn MetadataProvider>,
}

impl PropertyInjector {
    /// Create an injector over the given container and metadata provider
    pub fn new(container: Arc<dyn Container>, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            container,
            metadata,
        }
    }

    /// Populate the metadata-declared fields of `target` in place
    pub fn inject(&self, target: &mut dyn InjectTarget) -> Result<()> {
        let type_name = target.type_name().to_owned();
        let fields: Vec<String> = target.fields().iter().map(|f| (*f).to_owned()).collect();

        for field in fields {
            if let Some(key) = self.metadata.property_key(&type_name, &field) {
                debug!(type_name = %type_name, field = %field, key = %key, "injecting property");
                let value = self.container.get(&key)?;
                target.set_field(&field, value)?;
            }
        }
        Ok(())
    }
}

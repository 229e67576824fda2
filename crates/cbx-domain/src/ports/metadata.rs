//! Declarative injection metadata port

use indexmap::IndexMap;

/// Supplies the declarative container-key metadata attached to fields and
/// method parameters of host types.
///
/// The encoding is deliberately out of scope: implementations may back this
/// with explicit registration tables, configuration files, or generated
/// code. The core only ever asks two questions, both keyed by type name.
pub trait MetadataProvider: Send + Sync {
    /// Container key declared for a field of `type_name`, if any
    fn property_key(&self, type_name: &str, field: &str) -> Option<String>;

    /// Ordered parameter-name to container-key mapping declared for a
    /// method of `type_name`, if any
    fn method_parameter_keys(
        &self,
        type_name: &str,
        method: &str,
    ) -> Option<IndexMap<String, String>>;
}

/// Metadata provider that declares nothing.
///
/// Default collaborator for hosts that drive everything through explicit
/// arguments and container-typed parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMetadataProvider;

impl MetadataProvider for NullMetadataProvider {
    fn property_key(&self, _type_name: &str, _field: &str) -> Option<String> {
        None
    }

    fn method_parameter_keys(
        &self,
        _type_name: &str,
        _method: &str,
    ) -> Option<IndexMap<String, String>> {
        None
    }
}

//! Declarative metadata registry

use std::collections::HashMap;

use cbx_domain::ports::MetadataProvider;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Declarative [`MetadataProvider`] backed by plain maps.
///
/// Stands in for annotation or decorator readers: hosts declare container
/// keys for fields and method parameters through the builder, or load them
/// from configuration via
/// [`MetadataLoader`](crate::config::MetadataLoader).
///
/// ## Example
///
/// ```rust
/// use cbx_domain::MetadataProvider;
/// use cbx_infrastructure::MetadataRegistry;
///
/// let metadata = MetadataRegistry::new()
///     .with_property("Mailer", "transport", "smtp.transport")
///     .with_method_param("Mailer", "send", "signer", "mail.signer");
///
/// assert_eq!(
///     metadata.property_key("Mailer", "transport").as_deref(),
///     Some("smtp.transport")
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataRegistry {
    /// Per-type metadata, keyed by type name
    #[serde(default)]
    types: HashMap<String, TypeMetadata>,
}

/// Metadata declared for one type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeMetadata {
    /// Field name to container key
    #[serde(default)]
    properties: HashMap<String, String>,
    /// Method name to ordered parameter-name/container-key mapping
    #[serde(default)]
    methods: HashMap<String, IndexMap<String, String>>,
}

impl MetadataRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a container key for a field (builder style)
    pub fn with_property(
        mut self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.types
            .entry(type_name.into())
            .or_default()
            .properties
            .insert(field.into(), key.into());
        self
    }

    /// Declare a container key for a method parameter (builder style).
    ///
    /// Parameters keep the order in which they are declared.
    pub fn with_method_param(
        mut self,
        type_name: impl Into<String>,
        method: impl Into<String>,
        parameter: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.types
            .entry(type_name.into())
            .or_default()
            .methods
            .entry(method.into())
            .or_default()
            .insert(parameter.into(), key.into());
        self
    }

    /// Whether any metadata is declared
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataProvider for MetadataRegistry {
    fn property_key(&self, type_name: &str, field: &str) -> Option<String> {
        self.types.get(type_name)?.properties.get(field).cloned()
    }

    fn method_parameter_keys(
        &self,
        type_name: &str,
        method: &str,
    ) -> Option<IndexMap<String, String>> {
        self.types.get(type_name)?.methods.get(method).cloned()
    }
}

//! Tests for metadata-driven property injection

use std::sync::Arc;

use cbx_application::PropertyInjector;
use cbx_domain::{Error, InjectTarget, Result, Value};

use crate::support::{CountingContainer, MapMetadata};

struct Gadget {
    label: String,
    untouched: String,
}

impl Gadget {
    fn new() -> Self {
        Self {
            label: "unset".to_string(),
            untouched: "original".to_string(),
        }
    }
}

impl InjectTarget for Gadget {
    fn type_name(&self) -> &str {
        "Gadget"
    }

    fn fields(&self) -> &[&str] {
        &["label", "untouched"]
    }

    fn set_field(&mut self, field: &str, value: Value) -> Result<()> {
        let text = value
            .downcast_ref::<String>()
            .expect("Gadget fields are Strings")
            .clone();
        match field {
            "label" => self.label = text,
            "untouched" => self.untouched = text,
            _ => {
                return Err(Error::UnknownField {
                    type_name: self.type_name().to_string(),
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[test]
fn test_injects_metadata_declared_fields_only() {
    let metadata = MapMetadata::new().with_property("Gadget", "label", "gadget.label");
    let container = CountingContainer::new().with("gadget.label", Value::new("tagged".to_string()));
    let injector = PropertyInjector::new(Arc::new(container), Arc::new(metadata));
    let mut gadget = Gadget::new();

    injector.inject(&mut gadget).unwrap();

    assert_eq!(gadget.label, "tagged");
    assert_eq!(gadget.untouched, "original");
}

#[test]
fn test_injection_is_idempotent() {
    let metadata = MapMetadata::new().with_property("Gadget", "label", "gadget.label");
    let container = CountingContainer::new().with("gadget.label", Value::new("tagged".to_string()));
    let injector = PropertyInjector::new(Arc::new(container), Arc::new(metadata));
    let mut gadget = Gadget::new();

    injector.inject(&mut gadget).unwrap();
    injector.inject(&mut gadget).unwrap();

    assert_eq!(gadget.label, "tagged");
    assert_eq!(gadget.untouched, "original");
}

#[test]
fn test_absent_container_key_propagates_lookup_failure() {
    let metadata = MapMetadata::new().with_property("Gadget", "label", "gadget.label");
    let injector = PropertyInjector::new(
        Arc::new(CountingContainer::new()),
        Arc::new(metadata),
    );
    let mut gadget = Gadget::new();

    let result = injector.inject(&mut gadget);

    assert!(matches!(
        result,
        Err(Error::EntryNotFound { ref key }) if key == "gadget.label"
    ));
    // The failing field was never assigned.
    assert_eq!(gadget.label, "unset");
}

#[test]
fn test_no_metadata_leaves_instance_unchanged() {
    let injector = PropertyInjector::new(
        Arc::new(CountingContainer::new()),
        Arc::new(MapMetadata::new()),
    );
    let mut gadget = Gadget::new();

    injector.inject(&mut gadget).unwrap();

    assert_eq!(gadget.label, "unset");
    assert_eq!(gadget.untouched, "original");
}

//! Tests for the declarative metadata registry

use cbx_domain::MetadataProvider;
use cbx_infrastructure::MetadataRegistry;

#[test]
fn test_property_keys_are_scoped_by_type() {
    let metadata = MetadataRegistry::new()
        .with_property("Mailer", "transport", "smtp.transport")
        .with_property("Logger", "sink", "log.sink");

    assert_eq!(
        metadata.property_key("Mailer", "transport").as_deref(),
        Some("smtp.transport")
    );
    assert_eq!(
        metadata.property_key("Logger", "sink").as_deref(),
        Some("log.sink")
    );
    assert!(metadata.property_key("Mailer", "sink").is_none());
    assert!(metadata.property_key("Unknown", "transport").is_none());
}

#[test]
fn test_method_parameter_keys_preserve_declaration_order() {
    let metadata = MetadataRegistry::new()
        .with_method_param("Mailer", "send", "signer", "mail.signer")
        .with_method_param("Mailer", "send", "transport", "smtp.transport")
        .with_method_param("Mailer", "send", "auditor", "mail.auditor");

    let keys = metadata
        .method_parameter_keys("Mailer", "send")
        .expect("declared method");
    let names: Vec<&str> = keys.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["signer", "transport", "auditor"]);
    assert_eq!(keys.get("transport").map(String::as_str), Some("smtp.transport"));
}

#[test]
fn test_undeclared_method_yields_none() {
    let metadata = MetadataRegistry::new().with_property("Mailer", "transport", "smtp.transport");

    assert!(metadata.method_parameter_keys("Mailer", "send").is_none());
    assert!(metadata.method_parameter_keys("Unknown", "send").is_none());
}

#[test]
fn test_empty_registry() {
    let metadata = MetadataRegistry::new();

    assert!(metadata.is_empty());
    assert!(metadata.property_key("Any", "field").is_none());
}

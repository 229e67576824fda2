//! Tests for the core parameter resolution policy
//!
//! Exercises the per-parameter precedence (named > default > type lookup >
//! positional), the positional leftover assignment, and the failure modes.

use std::sync::Arc;

use cbx_application::ParameterResolver;
use cbx_domain::{ArgumentMap, Container, Error, ParameterSpec, Value};

use crate::support::CountingContainer;

fn resolver(container: CountingContainer) -> ParameterResolver {
    ParameterResolver::new(Arc::new(container))
}

fn int(value: &Value) -> i64 {
    *value.downcast_ref::<i64>().expect("i64 argument")
}

#[test]
fn test_named_entries_resolve_in_position_order() {
    let parameters = vec![
        ParameterSpec::new("a", 0),
        ParameterSpec::new("b", 1),
        ParameterSpec::new("c", 2),
    ];
    // Insertion order of named entries must not matter.
    let provided = ArgumentMap::new()
        .with_named("c", Value::new(3_i64))
        .with_named("a", Value::new(1_i64))
        .with_named("b", Value::new(2_i64));

    let resolved = resolver(CountingContainer::new())
        .resolve(&parameters, &provided)
        .unwrap();

    let values: Vec<i64> = resolved.iter().map(int).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_positional_leftovers_fill_pending_slots_in_ascending_key_order() {
    // Parameters [a, b], input {a: 1, 0: 2, 1: 3}: `a` binds by name, `b`
    // takes the first positional leftover; the leftover at key 1 is unused.
    let parameters = vec![ParameterSpec::new("a", 0), ParameterSpec::new("b", 1)];
    let provided = ArgumentMap::new()
        .with_named("a", Value::new(1_i64))
        .with_positional(0, Value::new(2_i64))
        .with_positional(1, Value::new(3_i64));

    let resolved = resolver(CountingContainer::new())
        .resolve(&parameters, &provided)
        .unwrap();

    let values: Vec<i64> = resolved.iter().map(int).collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_missing_positional_leftover_is_a_count_mismatch() {
    let parameters = vec![ParameterSpec::new("a", 0), ParameterSpec::new("b", 1)];
    let provided = ArgumentMap::new().with_named("a", Value::new(1_i64));

    let result = resolver(CountingContainer::new()).resolve(&parameters, &provided);

    assert!(matches!(
        result,
        Err(Error::ArgumentCountMismatch {
            pending: 1,
            available: 0
        })
    ));
}

#[test]
fn test_declared_type_resolves_from_container() {
    let parameters = vec![ParameterSpec::new("mailer", 0).with_type("Mailer")];
    let container = CountingContainer::new().with("Mailer", Value::new("smtp".to_string()));

    let resolved = resolver(container)
        .resolve(&parameters, &ArgumentMap::new())
        .unwrap();

    assert_eq!(
        resolved[0].downcast_ref::<String>().map(String::as_str),
        Some("smtp")
    );
}

#[test]
fn test_declared_type_without_provider_fails_naming_the_type() {
    let parameters = vec![ParameterSpec::new("mailer", 0).with_type("Mailer")];

    let result = resolver(CountingContainer::new()).resolve(&parameters, &ArgumentMap::new());

    assert!(matches!(
        result,
        Err(Error::MissingProvider { ref type_name }) if type_name == "Mailer"
    ));
}

#[test]
fn test_default_dominates_type_lookup() {
    // A parameter with both a default and a declared type always resolves
    // to the default; the container must never be consulted for it.
    let parameters = vec![
        ParameterSpec::new("retries", 0)
            .with_type("Retries")
            .with_default(Value::new(3_i64)),
    ];
    let container = Arc::new(CountingContainer::new().with("Retries", Value::new(99_i64)));
    let resolver = ParameterResolver::new(Arc::clone(&container) as Arc<dyn Container>);

    let resolved = resolver.resolve(&parameters, &ArgumentMap::new()).unwrap();

    assert_eq!(int(&resolved[0]), 3);
    assert_eq!(container.lookups(), 0);
}

#[test]
fn test_named_entry_dominates_default() {
    let parameters = vec![ParameterSpec::new("retries", 0).with_default(Value::new(3_i64))];
    let provided = ArgumentMap::new().with_named("retries", Value::new(7_i64));

    let resolved = resolver(CountingContainer::new())
        .resolve(&parameters, &provided)
        .unwrap();

    assert_eq!(int(&resolved[0]), 7);
}

#[test]
fn test_mixed_sources_re_sort_into_declaration_order() {
    // Positions resolved out of order internally (default at 1, type at 2,
    // positional at 0) must come back strictly position-sorted.
    let parameters = vec![
        ParameterSpec::new("a", 0),
        ParameterSpec::new("b", 1).with_default(Value::new(20_i64)),
        ParameterSpec::new("c", 2).with_type("C"),
    ];
    let container = CountingContainer::new().with("C", Value::new(30_i64));
    let provided = ArgumentMap::new().with_positional(0, Value::new(10_i64));

    let resolved = resolver(container).resolve(&parameters, &provided).unwrap();

    let values: Vec<i64> = resolved.iter().map(int).collect();
    assert_eq!(values, vec![10, 20, 30]);
}

#[test]
fn test_excess_positional_leftovers_are_silently_unused() {
    let parameters = vec![ParameterSpec::new("a", 0)];
    let provided = ArgumentMap::new()
        .with_positional(0, Value::new(1_i64))
        .with_positional(7, Value::new(2_i64));

    let resolved = resolver(CountingContainer::new())
        .resolve(&parameters, &provided)
        .unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(int(&resolved[0]), 1);
}

#[test]
fn test_empty_parameter_list_resolves_to_empty_arguments() {
    // Zero pending slots with spare positional entries is a success, not a
    // count mismatch.
    let provided = ArgumentMap::new().with_positional(0, Value::new(1_i64));

    let resolved = resolver(CountingContainer::new())
        .resolve(&[], &provided)
        .unwrap();

    assert!(resolved.is_empty());
}

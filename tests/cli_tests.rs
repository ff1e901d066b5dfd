#![cfg(feature = "cli")]

use cypher_dsl::cli::{capability_listing, execute_render, CliError, RenderOptions};
use cypher_dsl::Capability;
use test_case::test_case;

fn render(input: &str, capability: Capability) -> Result<String, CliError> {
    execute_render(&RenderOptions {
        input: Some(input.to_string()),
        capability,
    })
}

// ============================================================================
// Successful renders
// ============================================================================

#[test_case("42", Capability::Any, "42" ; "integer")]
#[test_case("1.0", Capability::Float, "1.0" ; "float keeps fraction")]
#[test_case("\"it's\"", Capability::String, r"'it\'s'" ; "escaped string")]
#[test_case("true", Capability::Boolean, "true" ; "boolean")]
#[test_case("null", Capability::Any, "NULL" ; "null")]
#[test_case("[]", Capability::Any, "[]" ; "empty array")]
#[test_case("{}", Capability::Any, "[]" ; "empty object is a list")]
#[test_case(r#"{"0": "a", "1": "b"}"#, Capability::Any, "['a', 'b']" ; "index keyed object is a list")]
#[test_case(r#"{"1": "b", "0": "a"}"#, Capability::Any, "{`1`: 'b', `0`: 'a'}" ; "reordered keys are a map")]
#[test_case(r#"{"first name": "Ada"}"#, Capability::Map, "{`first name`: 'Ada'}" ; "escaped map key")]
#[test_case(r#"{"a": 1, "b": 2}"#, Capability::List, "[1, 2]" ; "object as list keeps values")]
#[test_case(r#"[1, [2, {"k": true}]]"#, Capability::Composite, "[1, [2, {k: true}]]" ; "nested")]
fn test_render(input: &str, capability: Capability, expected: &str) {
    assert_eq!(render(input, capability).unwrap(), expected);
}

// ============================================================================
// Failures
// ============================================================================

#[test_case("\"x\"", Capability::Numeral ; "string as numeral")]
#[test_case("1", Capability::String ; "integer as string")]
#[test_case("1.5", Capability::Integer ; "float as integer")]
#[test_case("[1]", Capability::Property ; "array as property")]
#[test_case("\"2024-01-01\"", Capability::Date ; "string as date")]
#[test_case("\"n\"", Capability::Node ; "string as node")]
fn test_render_type_mismatch(input: &str, capability: Capability) {
    let err = render(input, capability).unwrap_err();
    assert!(matches!(err, CliError::TypeMismatch(_)), "got {:?}", err);
}

#[test]
fn test_mismatch_message_names_parameter() {
    let err = render("\"x\"", Capability::Numeral).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type mismatch: $numeral should be a NumeralType or int or float or decimal, string given"
    );
}

#[test]
fn test_invalid_json() {
    let err = render("{not json", Capability::Any).unwrap_err();
    assert!(matches!(err, CliError::Json(_)));
}

#[test]
fn test_missing_input() {
    let options = RenderOptions {
        input: None,
        capability: Capability::Any,
    };
    assert!(matches!(execute_render(&options), Err(CliError::NoInput)));
}

// ============================================================================
// Capability listing
// ============================================================================

#[test]
fn test_capability_names_round_trip() {
    for line in capability_listing().lines() {
        let name = line.split_whitespace().next().unwrap();
        let capability: Capability = name.parse().unwrap();
        assert_eq!(capability.name(), name);
    }
}

//! Tests for value and type-reference parsing.

use crate::ast::Location;
use crate::ast::PrimitiveKind;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::tests::utils::first_field;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_arg_value;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;

fn assert_primitive(value: &Value<'_>, kind: PrimitiveKind, raw: &str) {
    match value {
        Value::Primitive(primitive) => {
            assert_eq!(primitive.kind, kind);
            assert_eq!(primitive.raw, raw);
        },
        other => panic!("expected a primitive value, got: {other:?}"),
    }
}

// =============================================================================
// Scalars
// =============================================================================

/// Integer literals keep their raw text.
#[test]
fn value_int() {
    assert_primitive(&parse_arg_value("123"), PrimitiveKind::Int, "123");
}

/// A leading `-` is glued onto the number, even across whitespace.
#[test]
fn value_negative_numbers() {
    assert_primitive(&parse_arg_value("-456"), PrimitiveKind::Int, "-456");
    assert_primitive(&parse_arg_value("- 7"), PrimitiveKind::Int, "-7");
    assert_primitive(&parse_arg_value("-1.5e3"), PrimitiveKind::Float, "-1.5e3");
}

/// A `-` that is not followed by a number is a syntax error.
#[test]
fn value_minus_without_number() {
    let err = parse_err("{ f(a: -abc) }");
    assert_eq!(err.message(), r#"unexpected "abc", expecting number"#);
}

/// Float literals keep their raw text.
#[test]
fn value_float() {
    assert_primitive(&parse_arg_value("1.5"), PrimitiveKind::Float, "1.5");
    assert_primitive(&parse_arg_value("2e10"), PrimitiveKind::Float, "2e10");
}

/// Strings keep their quotes and escapes.
#[test]
fn value_string_keeps_raw_text() {
    assert_primitive(
        &parse_arg_value(r#""hello\nworld""#),
        PrimitiveKind::String,
        r#""hello\nworld""#,
    );
}

/// `true`, `false` and enum values are identifiers.
#[test]
fn value_identifiers() {
    assert_primitive(&parse_arg_value("true"), PrimitiveKind::Ident, "true");
    assert_primitive(&parse_arg_value("false"), PrimitiveKind::Ident, "false");
    assert_primitive(&parse_arg_value("ASC"), PrimitiveKind::Ident, "ASC");
}

/// `null` becomes its own variant.
#[test]
fn value_null() {
    assert!(matches!(parse_arg_value("null"), Value::Null { .. }));
}

// =============================================================================
// Variables
// =============================================================================

/// `$name` in an argument is a variable reference located at the `$`.
#[test]
fn value_variable() {
    match parse_arg_value("$first") {
        Value::Variable { name, location } => {
            assert_eq!(name, "first");
            assert_eq!(location, Location { line: 1, column: 8 });
        },
        other => panic!("expected a variable, got: {other:?}"),
    }
}

/// Default values are constant, so variables are rejected there.
#[test]
fn value_variable_not_allowed_in_default() {
    let err = parse_err("query ($a: Int = $b) { f }");
    assert_eq!(err.kind(), &GraphQLParseErrorKind::VariableNotAllowed);
    assert_eq!(err.message(), "variable not allowed");
    assert_eq!(err.location(), Location { line: 1, column: 18 });
}

/// `parse_value(true)` rejects variables when called directly.
#[test]
fn value_const_only_via_public_api() {
    let mut parser = GraphQLParser::new("$x");
    let err = parser.parse_value(true).unwrap_err();
    assert_eq!(err.kind(), &GraphQLParseErrorKind::VariableNotAllowed);

    let mut parser = GraphQLParser::new("$x");
    assert!(matches!(parser.parse_value(false), Ok(Value::Variable { .. })));
    assert!(parser.is_at_end());
}

// =============================================================================
// Lists and objects
// =============================================================================

/// Lists keep their items in order; commas are insignificant.
#[test]
fn value_list() {
    match parse_arg_value("[1, 2 3]") {
        Value::List { items, .. } => {
            assert_eq!(items.len(), 3);
            assert_primitive(&items[2], PrimitiveKind::Int, "3");
        },
        other => panic!("expected a list, got: {other:?}"),
    }
    assert!(matches!(parse_arg_value("[]"), Value::List { items, .. } if items.is_empty()));
}

/// Objects keep their fields in order and may nest.
#[test]
fn value_object() {
    match parse_arg_value("{a: 1, b: {c: [$v]}}") {
        Value::Object { fields, .. } => {
            assert_eq!(fields.len(), 2);
            assert_eq!(fields[0].name.as_str(), "a");
            assert_eq!(fields[1].name.as_str(), "b");
            assert!(matches!(&fields[1].value, Value::Object { fields, .. } if fields.len() == 1));
        },
        other => panic!("expected an object, got: {other:?}"),
    }
}

/// A punctuator where a value belongs is an "invalid value".
#[test]
fn value_invalid_start() {
    let err = parse_err("{ f(a: ) }");
    assert_eq!(err.message(), "invalid value");
    assert_eq!(err.location(), Location { line: 1, column: 8 });
}

/// Deeply nested lists hit the recursion limit instead of the stack limit.
#[test]
fn value_nesting_limit() {
    let source = format!("{{ f(a: {}{}) }}", "[".repeat(200), "]".repeat(200));
    let err = parse_err(&source);
    assert_eq!(err.kind(), &GraphQLParseErrorKind::RecursionLimitExceeded);
}

// =============================================================================
// Type references
// =============================================================================

/// `!` wraps whatever was parsed before it.
#[test]
fn type_ref_wrapping() {
    let mut parser = GraphQLParser::new("[Int!]!");
    let type_ref = parser.parse_type().unwrap();
    assert_eq!(type_ref.to_string(), "[Int!]!");
    match &type_ref {
        TypeRef::NonNull(inner) => assert!(matches!(inner.as_ref(), TypeRef::List(_))),
        other => panic!("expected a non-null type, got: {other:?}"),
    }
    assert_eq!(type_ref.named_type().as_str(), "Int");
}

/// Variable definitions carry their type and default value.
#[test]
fn type_ref_in_variable_definitions() {
    let document = parse_ok("query ($ids: [ID!] = [\"a\"], $n: Int!) { f }");
    let operation = only_operation(&document);
    assert_eq!(operation.variables.len(), 2);

    let ids = &operation.variables[0];
    assert_eq!(ids.name.as_str(), "ids");
    assert_eq!(ids.value_type.to_string(), "[ID!]");
    assert_eq!(ids.location, Location { line: 1, column: 8 });
    assert_eq!(ids.type_location, Location { line: 1, column: 14 });
    assert!(matches!(ids.default_value, Some(Value::List { .. })));

    let n = &operation.variables[1];
    assert_eq!(n.value_type.to_string(), "Int!");
    assert!(n.default_value.is_none());
    assert!(first_field(&operation.selections).arguments.is_empty());
}

/// An unclosed list type reports what it was expecting.
#[test]
fn type_ref_unclosed_list() {
    let mut parser = GraphQLParser::new("[Int");
    let err = parser.parse_type().unwrap_err();
    assert_eq!(err.message(), r#"unexpected <EOF>, expecting "]""#);
}

//! Tests for selection sets: fields, aliases, fragment spreads and inline
//! fragments.

use crate::ast::Location;
use crate::ast::Selection;
use crate::tests::utils::first_field;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::GraphQLParseErrorKind;

// =============================================================================
// Fields
// =============================================================================

/// A leaf field has no selection set; a written `{}` is an empty one.
#[test]
fn field_leaf_vs_empty_selection_set() {
    let document = parse_ok("{ leaf empty {} }");
    let selections = &only_operation(&document).selections;
    assert_eq!(selections.len(), 2);

    let Selection::Field(leaf) = &selections[0] else {
        panic!("expected a field");
    };
    assert!(leaf.selection_set.is_none());

    let Selection::Field(empty) = &selections[1] else {
        panic!("expected a field");
    };
    assert_eq!(empty.selection_set.as_deref(), Some(&[][..]));
}

/// `alias: name` puts the first identifier in `alias`, and the field is
/// located at the alias.
#[test]
fn field_alias() {
    let document = parse_ok("{\n  smallPic: profilePic(size: 64)\n}");
    let field = first_field(&only_operation(&document).selections);
    assert_eq!(field.alias.as_ref().map(|a| a.as_str()), Some("smallPic"));
    assert_eq!(field.name.as_str(), "profilePic");
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(field.location(), Location { line: 2, column: 3 });
    assert_eq!(field.name.location, Location { line: 2, column: 13 });
}

/// `Field::argument()` returns the first argument with a matching name.
#[test]
fn field_argument_lookup() {
    let document = parse_ok("{ users(first: 1, after: \"x\", first: 2) { id } }");
    let field = first_field(&only_operation(&document).selections);
    assert_eq!(field.arguments.len(), 3);
    let first = field.argument("first").unwrap();
    assert_eq!(first.value.location(), Location { line: 1, column: 16 });
    assert!(field.argument("last").is_none());
}

/// An empty argument list is accepted.
#[test]
fn field_empty_arguments() {
    let document = parse_ok("{ f() }");
    let field = first_field(&only_operation(&document).selections);
    assert!(field.arguments.is_empty());
}

// =============================================================================
// Directives
// =============================================================================

/// Directive locations point at the `@`.
#[test]
fn directive_location_points_at_at_sign() {
    let document = parse_ok("{ f @include(if: $show) @skip(if: false) }");
    let field = first_field(&only_operation(&document).selections);
    assert_eq!(field.directives.len(), 2);

    let include = &field.directives[0];
    assert_eq!(include.name.as_str(), "include");
    assert_eq!(include.location(), Location { line: 1, column: 5 });
    assert_eq!(include.arguments.len(), 1);

    let skip = &field.directives[1];
    assert_eq!(skip.location(), Location { line: 1, column: 25 });
}

// =============================================================================
// Fragments
// =============================================================================

/// `...Name` is a fragment spread located at the ellipsis.
#[test]
fn fragment_spread() {
    let document = parse_ok("{ ...userFields @defer }");
    let selections = &only_operation(&document).selections;
    let Selection::FragmentSpread(spread) = &selections[0] else {
        panic!("expected a fragment spread, got: {:?}", selections[0]);
    };
    assert_eq!(spread.name.as_str(), "userFields");
    assert_eq!(spread.directives.len(), 1);
    assert_eq!(spread.location, Location { line: 1, column: 3 });
}

/// `... on Type { }` is an inline fragment with a type condition.
#[test]
fn inline_fragment_with_type_condition() {
    let document = parse_ok("{ ... on User { id } }");
    let selections = &only_operation(&document).selections;
    let Selection::InlineFragment(inline) = &selections[0] else {
        panic!("expected an inline fragment, got: {:?}", selections[0]);
    };
    assert_eq!(inline.type_condition.as_ref().map(|t| t.as_str()), Some("User"));
    assert_eq!(inline.selections.len(), 1);
}

/// Inline fragments may omit the type condition.
#[test]
fn inline_fragment_without_type_condition() {
    let document = parse_ok("{ ... @include(if: true) { id } ... { name } }");
    let selections = &only_operation(&document).selections;
    assert_eq!(selections.len(), 2);
    for selection in selections {
        let Selection::InlineFragment(inline) = selection else {
            panic!("expected an inline fragment, got: {selection:?}");
        };
        assert!(inline.type_condition.is_none());
    }
}

/// Deeply nested selection sets hit the recursion limit.
#[test]
fn selection_nesting_limit() {
    let source = format!("{}{}", "{a".repeat(100), "}".repeat(100));
    let err = parse_err(&source);
    assert_eq!(err.kind(), &GraphQLParseErrorKind::RecursionLimitExceeded);
}

/// Nesting below the limit parses fine.
#[test]
fn selection_nesting_below_limit() {
    let source = format!("{}{}", "{a".repeat(30), "}".repeat(30));
    let document = parse_ok(&source);
    assert_eq!(document.operations.len(), 1);
}

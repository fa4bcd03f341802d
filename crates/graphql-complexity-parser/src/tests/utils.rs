//! Various test utils.

use crate::ast;
use crate::ast::Selection;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;

/// Creates a mock token with the given kind and minimal span/trivia.
///
/// Uses `'static` lifetime since test tokens use owned strings.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    let pos = SourcePosition::new(0, 0, Some(0), 0);
    GraphQLToken {
        kind,
        preceding_trivia: smallvec![],
        span: GraphQLSourceSpan::empty_at(pos),
    }
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

/// Creates a mock Eof token.
pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

/// Helper to parse an executable document with comment descriptions.
pub(super) fn parse_executable(
    source: &str,
) -> Result<ast::Document<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_executable_document()
}

/// Parses `source`, panicking with the formatted error on failure.
pub(super) fn parse_ok(source: &str) -> ast::Document<'_> {
    match parse_executable(source) {
        Ok(document) => document,
        Err(err) => panic!("unexpected parse error: {}", err.format_detailed(Some(source), None)),
    }
}

/// Parses `source` and returns the error it must produce.
pub(super) fn parse_err(source: &str) -> GraphQLParseError {
    match parse_executable(source) {
        Ok(document) => panic!("expected a parse error, got: {document:#?}"),
        Err(err) => err,
    }
}

/// Returns the single operation of a document.
pub(super) fn only_operation<'a, 'src>(
    document: &'a ast::Document<'src>,
) -> &'a ast::Operation<'src> {
    assert_eq!(document.operations.len(), 1, "expected exactly one operation");
    &document.operations[0]
}

/// Returns the first selection as a field.
pub(super) fn first_field<'a, 'src>(
    selections: &'a [Selection<'src>],
) -> &'a ast::Field<'src> {
    match selections.first() {
        Some(Selection::Field(field)) => field,
        other => panic!("expected a field selection, got: {other:?}"),
    }
}

/// Parses `{ f(a: <value>) }` and returns the argument value.
pub(super) fn parse_arg_value(value_source: &str) -> ast::Value<'static> {
    let source = format!("{{ f(a: {value_source}) }}");
    let document = parse_ok(&source);
    let field = first_field(&only_operation(&document).selections);
    into_static_value(field.arguments[0].value.clone())
}

/// Detaches a value from the source buffer so helpers can return it.
fn into_static_value(value: ast::Value<'_>) -> ast::Value<'static> {
    use std::borrow::Cow;

    fn ident(ident: ast::Ident<'_>) -> ast::Ident<'static> {
        ast::Ident {
            name: Cow::Owned(ident.name.into_owned()),
            location: ident.location,
        }
    }

    match value {
        ast::Value::Variable { name, location } => ast::Value::Variable {
            name: Cow::Owned(name.into_owned()),
            location,
        },
        ast::Value::Primitive(primitive) => ast::Value::Primitive(ast::PrimitiveValue {
            kind: primitive.kind,
            raw: Cow::Owned(primitive.raw.into_owned()),
            location: primitive.location,
        }),
        ast::Value::Null { location } => ast::Value::Null { location },
        ast::Value::List { items, location } => ast::Value::List {
            items: items.into_iter().map(into_static_value).collect(),
            location,
        },
        ast::Value::Object { fields, location } => ast::Value::Object {
            fields: fields
                .into_iter()
                .map(|field| ast::ObjectField {
                    name: ident(field.name),
                    value: into_static_value(field.value),
                })
                .collect(),
            location,
        },
    }
}

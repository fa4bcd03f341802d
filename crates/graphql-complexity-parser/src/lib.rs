//! A lexer and recursive descent parser for GraphQL executable documents
//! (operations and fragment definitions).
//!
//! Every AST node keeps the 1-based line/column of its first token, and the
//! parser can attach descriptions taken either from `#` comments or from
//! string literals placed in front of a definition.
//!
//! ```
//! use graphql_complexity_parser::ast::Selection;
//!
//! let document = graphql_complexity_parser::parse_executable_document(
//!     "query { viewer { login } }",
//! ).unwrap();
//! let Selection::Field(viewer) = &document.operations[0].selections[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(viewer.name.as_str(), "viewer");
//! ```

pub mod ast;
mod block_string;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_string_parsing_error;
mod graphql_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use block_string::block_string_value;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_string_parsing_error::GraphQLStringParsingError;
pub use graphql_token_stream::GraphQLTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

/// Parses `source` as an executable document, taking descriptions from `#`
/// comments.
pub fn parse_executable_document(
    source: &str,
) -> Result<ast::Document<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_executable_document()
}

#[cfg(test)]
mod tests;

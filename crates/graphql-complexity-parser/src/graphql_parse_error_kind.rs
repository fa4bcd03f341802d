use crate::GraphQLStringParsingError;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions. The
/// full human-readable message lives in `GraphQLParseError::message()`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { field(arg 1) }
    ///                   ^ unexpected "1", expecting ":"
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What tokens were expected (e.g. `[":"]`, `["Name"]`, `["value"]`).
        expected: Vec<String>,
        /// Source text of what was found.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        /// What was expected when EOF was encountered.
        expected: Vec<String>,
    },

    /// The parser encountered a `GraphQLTokenKind::Error` token from the
    /// lexer. The lexer's message is preserved in the parent
    /// `GraphQLParseError`.
    ///
    /// # Example
    /// ```text
    /// { field(arg: "unterminated
    ///              ^ literal not terminated
    /// ```
    #[error("lexer error")]
    LexerError,

    /// A `$variable` appeared where only constant values are allowed (e.g. a
    /// default value).
    #[error("variable not allowed")]
    VariableNotAllowed,

    /// A string description could not be unescaped.
    #[error("invalid string: {0}")]
    InvalidString(GraphQLStringParsingError),

    /// Lists, objects, types or selection sets nest deeper than the parser's
    /// recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

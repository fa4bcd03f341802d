/// Why a string literal's raw text could not be turned into its value.
///
/// Returned by `GraphQLTokenKind::parse_string_value()`. The parser reports
/// it as an `InvalidString` syntax error when a string description is bad.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GraphQLStringParsingError {
    /// e.g. `\q`
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    #[error("Unterminated string: missing closing quote")]
    UnterminatedString,

    /// e.g. `\u{ZZZZ}`, or a code point that isn't a `char`.
    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),
}

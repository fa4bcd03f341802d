use crate::ast::Location;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use std::path::Path;

/// A syntax error with location information.
///
/// `Display` renders the compact form used when the error is returned to an
/// API caller:
///
/// ```text
/// graphql: syntax error: literal not terminated (line 1, column 1)
/// ```
///
/// [`format_detailed()`](Self::format_detailed) renders a multi-line
/// diagnostic with a source snippet for terminal output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message.
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For EOF errors: the end of the last consumed token
    span: GraphQLSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
        }
    }

    /// Creates a parse error from a lexer error token, keeping the lexer's
    /// message.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        Self::new(message, span, GraphQLParseErrorKind::LexerError)
    }

    /// Replaces the message of a syntax error. Lexer errors keep the lexer's
    /// message.
    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        if !matches!(self.kind, GraphQLParseErrorKind::LexerError) {
            self.message = message.into();
        }
        self
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Returns the 1-based location of the offending token.
    pub fn location(&self) -> Location {
        self.span.start_inclusive.to_location()
    }

    /// Formats this error as a single-line summary.
    pub fn format_oneline(&self) -> String {
        let Location { line, column } = self.location();
        format!(
            "graphql: syntax error: {} (line {line}, column {column})",
            self.message,
        )
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: unexpected "1", expecting ":"
    ///   --> query.graphql:1:19
    ///    |
    ///  1 | query { field(arg 1) }
    ///    |                   ^
    /// ```
    ///
    /// # Arguments
    /// - `source`: Optional source text for snippet extraction. If `None`,
    ///   the snippet is omitted but line/column info is still shown.
    /// - `file_path`: Optional path shown in the location line. Falls back to
    ///   `<input>`.
    pub fn format_detailed(&self, source: Option<&str>, file_path: Option<&Path>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let file_name = file_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        let Location { line, column } = self.location();
        output.push_str(&format!("  --> {file_name}:{line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        output
    }

    /// Formats the source snippet for the primary error span.
    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.span.start_inclusive.line();
        let line_content = source.lines().nth(line_num)?;
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = self.span.start_inclusive.col_utf8();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col_utf8()
        } else {
            line_content.chars().count()
        };
        let underline_len = col_end.saturating_sub(col_start).max(1);

        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start,
        ));

        Some(output)
    }
}

//! Tests for `GraphQLToken::preceding_comment_block()`.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;

fn span() -> GraphQLSourceSpan {
    GraphQLSourceSpan::empty_at(SourcePosition::new(0, 0, Some(0), 0))
}

fn comment(text: &'static str) -> GraphQLTriviaToken<'static> {
    GraphQLTriviaToken::Comment {
        value: Cow::Borrowed(text),
        span: span(),
    }
}

/// No comments means no comment block.
#[test]
fn no_comments() {
    let token = GraphQLToken::new(GraphQLTokenKind::Eof, span());
    assert_eq!(token.preceding_comment_block(), None);
}

/// Comments are joined with `\n`, commas are skipped, and only one leading
/// space is dropped from each line.
#[test]
fn comments_joined() {
    let mut token = GraphQLToken::new(GraphQLTokenKind::name_borrowed("type"), span());
    token.preceding_trivia.push(comment(" first"));
    token.preceding_trivia.push(GraphQLTriviaToken::Comma { span: span() });
    token.preceding_trivia.push(comment("second"));
    token.preceding_trivia.push(comment("   indented"));
    assert_eq!(
        token.preceding_comment_block().as_deref(),
        Some("first\nsecond\n  indented"),
    );
}

/// An empty `#` line contributes an empty line.
#[test]
fn empty_comment_line() {
    let mut token = GraphQLToken::new(GraphQLTokenKind::Eof, span());
    token.preceding_trivia.push(comment(" a"));
    token.preceding_trivia.push(comment(""));
    token.preceding_trivia.push(comment(" b"));
    assert_eq!(token.preceding_comment_block().as_deref(), Some("a\n\nb"));
}

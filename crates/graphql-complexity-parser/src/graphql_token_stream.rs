//! Lookahead buffer between a token source and the parser.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use std::collections::VecDeque;

/// Pulls tokens from a [`GraphQLTokenSource`] on demand and keeps the ones
/// that have been peeked at but not consumed.
///
/// Trivia rides on the tokens themselves, so the stream never has to skip
/// anything.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    lookahead: VecDeque<GraphQLToken<'src>>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            lookahead: VecDeque::new(),
        }
    }

    /// Removes and returns the next token. `None` once the source is drained.
    pub fn consume(&mut self) -> Option<GraphQLToken<'src>> {
        self.fill(1);
        self.lookahead.pop_front()
    }

    #[inline]
    pub fn peek(&mut self) -> Option<&GraphQLToken<'src>> {
        self.peek_nth(0)
    }

    /// The token `n` places after the next one, without consuming anything.
    pub fn peek_nth(&mut self, n: usize) -> Option<&GraphQLToken<'src>> {
        self.fill(n + 1);
        self.lookahead.get(n)
    }

    /// `true` when the next token is `Eof` or the source is drained.
    pub fn is_at_end(&mut self) -> bool {
        self.peek()
            .is_none_or(|token| token.kind == GraphQLTokenKind::Eof)
    }

    fn fill(&mut self, len: usize) {
        while self.lookahead.len() < len
            && let Some(token) = self.token_source.next()
        {
            self.lookahead.push_back(token);
        }
    }
}

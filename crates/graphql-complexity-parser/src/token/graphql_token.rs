use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::GraphQLSourceSpan;
use smallvec::SmallVec;

/// Most tokens are preceded by at most a comma and a comment.
pub type GraphQLTriviaTokenVec<'src> = SmallVec<[GraphQLTriviaToken<'src>; 2]>;

/// A token, where it is, and the comments and commas in front of it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind<'src>,

    /// In source order.
    pub preceding_trivia: GraphQLTriviaTokenVec<'src>,

    pub span: GraphQLSourceSpan,
}

impl<'src> GraphQLToken<'src> {
    /// A token with no trivia.
    pub fn new(kind: GraphQLTokenKind<'src>, span: GraphQLSourceSpan) -> Self {
        Self {
            kind,
            preceding_trivia: SmallVec::new(),
            span,
        }
    }

    /// Joins the text of every comment preceding this token with `\n`.
    ///
    /// One space directly after each `#` is dropped, so `# Hello` and
    /// `#Hello` both contribute `Hello`. Returns `None` when no comment
    /// precedes the token.
    pub fn preceding_comment_block(&self) -> Option<String> {
        let mut block: Option<String> = None;
        for trivia in &self.preceding_trivia {
            if let GraphQLTriviaToken::Comment { value, .. } = trivia {
                let line = value.strip_prefix(' ').unwrap_or(value.as_ref());
                match block.as_mut() {
                    Some(text) => {
                        text.push('\n');
                        text.push_str(line);
                    },
                    None => block = Some(line.to_string()),
                }
            }
        }
        block
    }
}

use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// Source text the grammar ignores but the token source keeps, attached to
/// the token that follows it.
///
/// Comments in front of a definition become its description unless the
/// parser is reading string descriptions.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTriviaToken<'src> {
    /// `#` to the end of the line.
    Comment {
        /// Everything after the `#`.
        value: Cow<'src, str>,
        span: GraphQLSourceSpan,
    },

    Comma {
        span: GraphQLSourceSpan,
    },
}

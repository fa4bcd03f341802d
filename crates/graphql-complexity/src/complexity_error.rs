use crate::parser::GraphQLParseError;

/// Why an operation could not be scored.
///
/// Only structurally required information fails a score. Unresolved
/// fragment spreads, non-numeric page sizes and wrongly typed variables
/// count as zero instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComplexityError {
    /// The document is not valid GraphQL. Carries the parser's error
    /// unchanged.
    #[error(transparent)]
    Syntax(#[from] GraphQLParseError),

    /// A `first`/`last` argument references a variable that the caller did
    /// not supply.
    #[error("Variable {name} not defined")]
    UndefinedVariable {
        /// The variable name, without `$`.
        name: String,
    },

    /// A fragment spreads itself, directly or through other fragments.
    #[error("Fragment {name} spreads itself")]
    FragmentCycle {
        /// The fragment that was re-entered.
        name: String,
    },

    /// Fragment spreads, each inside the one before, nest too deeply to
    /// expand.
    #[error("Fragment {name} is nested more than {max_depth} selection sets deep")]
    FragmentDepthExceeded {
        /// The fragment whose spread crossed the limit.
        name: String,
        max_depth: usize,
    },

    /// The score is above the configured maximum.
    #[error("Query complexity of {score} exceeds the maximum of {max}")]
    LimitExceeded {
        score: i64,
        max: i64,
    },
}

//! Estimates how expensive a GraphQL operation is before it runs.
//!
//! The score counts a fixed overhead for every object a query selects into
//! and multiplies the cost of paginated connections by their page size
//! (`first`/`last`). Mutations start from a fixed base cost. Callers can pin
//! the cost of individual fields by name.
//!
//! ```
//! use std::collections::HashMap;
//!
//! let variables: HashMap<String, serde_json::Value> = HashMap::new();
//! let overrides = HashMap::new();
//! let cost = graphql_complexity::score(
//!     "query { groups(first: 5) { edges { node { id } } } }",
//!     &variables,
//!     &overrides,
//! );
//! assert_eq!(cost, Ok(7));
//! ```

mod complexity_analyzer;
mod complexity_error;
mod complexity_scorer;
mod fragment_registry;
mod item_count;

pub use complexity_analyzer::ComplexityAnalyzer;
pub use complexity_analyzer::ComplexityConfig;
pub use complexity_error::ComplexityError;
pub use complexity_scorer::CONNECTION_COST;
pub use complexity_scorer::MAX_SELECTION_DEPTH;
pub use complexity_scorer::MUTATION_BASE_COST;
pub use complexity_scorer::OBJECT_COST;
pub use fragment_registry::FragmentRegistry;
pub use graphql_complexity_parser as parser;
pub use item_count::parse_literal_count;
pub use item_count::AsItemCount;

use complexity_scorer::ComplexityScorer;
use parser::ast::Document;
use std::collections::HashMap;
use tracing::debug;

/// Parses `document` and returns its total complexity.
///
/// `variables` resolves `$name` page sizes; a referenced name missing from it
/// fails with [`ComplexityError::UndefinedVariable`]. `overrides` fixes the
/// cost of every field with a given name.
#[tracing::instrument(level = "debug", skip_all)]
pub fn score<V: AsItemCount>(
    document: &str,
    variables: &HashMap<String, V>,
    overrides: &HashMap<String, i64>,
) -> Result<i64, ComplexityError> {
    let document = parser::parse_executable_document(document)?;
    score_document(&document, variables, overrides)
}

/// Like [`score()`] for an already parsed document.
pub fn score_document<V: AsItemCount>(
    document: &Document<'_>,
    variables: &HashMap<String, V>,
    overrides: &HashMap<String, i64>,
) -> Result<i64, ComplexityError> {
    let total = ComplexityScorer::new(document, variables, overrides).run()?;
    debug!(
        operations = document.operations.len(),
        fragments = document.fragments.len(),
        total,
        "scored document"
    );
    Ok(total)
}

#[cfg(test)]
mod tests;

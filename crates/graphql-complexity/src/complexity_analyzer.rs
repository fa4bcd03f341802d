use crate::parser;
use crate::parser::ast::Document;
use crate::AsItemCount;
use crate::ComplexityError;
use std::collections::HashMap;
use tracing::warn;

/// Serializable settings for a [`ComplexityAnalyzer`].
///
/// ```json
/// {
///   "overrides": { "search": 50, "viewer": 1 },
///   "max_complexity": 1000
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplexityConfig {
    /// Fixed costs by field name. An override replaces the whole cost of
    /// every field with that name, children included.
    pub overrides: HashMap<String, i64>,

    /// Scores above this value are rejected by
    /// [`ComplexityAnalyzer::analyze()`].
    pub max_complexity: Option<i64>,
}

/// Scores operations against a fixed set of overrides and an optional
/// budget.
///
/// ```
/// use graphql_complexity::ComplexityAnalyzer;
/// use graphql_complexity::ComplexityError;
/// use std::collections::HashMap;
///
/// let analyzer = ComplexityAnalyzer::new()
///     .with_override("search", 50)
///     .with_max_complexity(20);
/// let variables: HashMap<String, i64> = HashMap::new();
///
/// let err = analyzer.analyze("{ search { id } }", &variables).unwrap_err();
/// assert_eq!(err, ComplexityError::LimitExceeded { score: 50, max: 20 });
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComplexityAnalyzer {
    config: ComplexityConfig,
}

impl ComplexityAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ComplexityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComplexityConfig {
        &self.config
    }

    pub fn with_override(mut self, field_name: impl Into<String>, cost: i64) -> Self {
        self.config.overrides.insert(field_name.into(), cost);
        self
    }

    pub fn with_overrides<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        self.config
            .overrides
            .extend(overrides.into_iter().map(|(name, cost)| (name.into(), cost)));
        self
    }

    pub fn with_max_complexity(mut self, max_complexity: i64) -> Self {
        self.config.max_complexity = Some(max_complexity);
        self
    }

    /// Scores `document` without checking the budget.
    pub fn score<V: AsItemCount>(
        &self,
        document: &str,
        variables: &HashMap<String, V>,
    ) -> Result<i64, ComplexityError> {
        crate::score(document, variables, &self.config.overrides)
    }

    /// Scores `document` and rejects it if the score is above
    /// `max_complexity`. A score equal to the maximum passes.
    pub fn analyze<V: AsItemCount>(
        &self,
        document: &str,
        variables: &HashMap<String, V>,
    ) -> Result<i64, ComplexityError> {
        let document = parser::parse_executable_document(document)?;
        self.analyze_document(&document, variables)
    }

    /// Like [`analyze()`](Self::analyze) for an already parsed document.
    pub fn analyze_document<V: AsItemCount>(
        &self,
        document: &Document<'_>,
        variables: &HashMap<String, V>,
    ) -> Result<i64, ComplexityError> {
        let score = crate::score_document(document, variables, &self.config.overrides)?;
        match self.config.max_complexity {
            Some(max) if score > max => {
                warn!(score, max, "query complexity exceeds the maximum");
                Err(ComplexityError::LimitExceeded { score, max })
            },
            _ => Ok(score),
        }
    }
}

use crate::score;
use crate::ComplexityError;
use std::collections::HashMap;

pub(super) fn no_variables() -> HashMap<String, serde_json::Value> {
    HashMap::new()
}

pub(super) fn variables(pairs: &[(&str, serde_json::Value)]) -> HashMap<String, serde_json::Value> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

pub(super) fn overrides(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
    pairs
        .iter()
        .map(|(name, cost)| (name.to_string(), *cost))
        .collect()
}

/// Scores `query` with no variables and no overrides, panicking on error.
pub(super) fn score_ok(query: &str) -> i64 {
    match score(query, &no_variables(), &HashMap::new()) {
        Ok(total) => total,
        Err(err) => panic!("failed to score {query:?}: {err}"),
    }
}

/// Scores `query` with no variables and no overrides, panicking on success.
pub(super) fn score_err(query: &str) -> ComplexityError {
    match score(query, &no_variables(), &HashMap::new()) {
        Ok(total) => panic!("expected {query:?} to fail, scored {total}"),
        Err(err) => err,
    }
}

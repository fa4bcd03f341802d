//! The scoring pass over a parsed document.
//!
//! Costs are summed depth-first, left to right:
//!
//! | Selection | Cost |
//! |---|---|
//! | field with an override | the override, children not visited |
//! | `pageInfo` | 0, children not visited |
//! | `edges` | cost of its children |
//! | field with `first`/`last` | `count * children + CONNECTION_COST` |
//! | other field with a selection set | `children + OBJECT_COST` |
//! | leaf field | 0 |
//! | fragment spread | cost of the fragment's selections, 0 if undefined |
//! | inline fragment | cost of its selections |
//!
//! Mutations start at [`MUTATION_BASE_COST`] and charge only the children of
//! each payload field's own children; see
//! [`score_mutation()`](ComplexityScorer::score_mutation).
//!
//! A fragment's cost is computed once per call and reused at every later
//! spread. Expanding a spread nested more than [`MAX_SELECTION_DEPTH`]
//! selection sets deep fails with
//! [`ComplexityError::FragmentDepthExceeded`].

use crate::fragment_registry::FragmentRegistry;
use crate::item_count::parse_literal_count;
use crate::parser::ast::Argument;
use crate::parser::ast::Document;
use crate::parser::ast::Field;
use crate::parser::ast::FragmentSpread;
use crate::parser::ast::Ident;
use crate::parser::ast::OperationKind;
use crate::parser::ast::Selection;
use crate::parser::ast::Value;
use crate::AsItemCount;
use crate::ComplexityError;
use std::collections::HashMap;
use tracing::debug;
use tracing::trace;

/// Fixed overhead of a paginated connection field.
pub const CONNECTION_COST: i64 = 2;

/// Fixed overhead of a field that selects into an object.
pub const OBJECT_COST: i64 = 1;

/// Base cost of every mutation operation.
pub const MUTATION_BASE_COST: i64 = 10;

/// How many selection sets deep, counting through fragment spreads, a spread
/// may still be expanded.
pub const MAX_SELECTION_DEPTH: usize = 256;

/// Per-call scoring state. Never shared between calls.
pub(crate) struct ComplexityScorer<'a, 'doc, 'src, V> {
    document: &'doc Document<'src>,
    fragments: FragmentRegistry<'doc, 'src>,
    variables: &'a HashMap<String, V>,
    overrides: &'a HashMap<String, i64>,
    /// Fragments being expanded on the current path, outermost first.
    spread_stack: Vec<&'doc str>,
    /// Costs of fragments already expanded in this call.
    fragment_costs: HashMap<&'doc str, i64>,
    /// Selection sets currently being scored.
    depth: usize,
}

impl<'a, 'doc, 'src, V: AsItemCount> ComplexityScorer<'a, 'doc, 'src, V> {
    pub(crate) fn new(
        document: &'doc Document<'src>,
        variables: &'a HashMap<String, V>,
        overrides: &'a HashMap<String, i64>,
    ) -> Self {
        Self {
            document,
            fragments: FragmentRegistry::from_document(document),
            variables,
            overrides,
            spread_stack: Vec::new(),
            fragment_costs: HashMap::new(),
            depth: 0,
        }
    }

    /// Scores every operation in document order and sums the costs.
    pub(crate) fn run(mut self) -> Result<i64, ComplexityError> {
        let document = self.document;
        let mut total: i64 = 0;
        for operation in &document.operations {
            let cost = match operation.kind {
                OperationKind::Query => self.score_selections(&operation.selections)?,
                OperationKind::Mutation => self.score_mutation(&operation.selections)?,
                OperationKind::Subscription => 0,
            };
            debug!(
                kind = %operation.kind,
                name = ?operation.name.as_ref().map(Ident::as_str),
                cost,
                "scored operation"
            );
            total = total.saturating_add(cost);
        }
        Ok(total)
    }

    fn score_selections(
        &mut self,
        selections: &'doc [Selection<'src>],
    ) -> Result<i64, ComplexityError> {
        self.depth += 1;
        let cost = self.sum_selections(selections);
        self.depth -= 1;
        cost
    }

    fn sum_selections(
        &mut self,
        selections: &'doc [Selection<'src>],
    ) -> Result<i64, ComplexityError> {
        let mut cost: i64 = 0;
        for selection in selections {
            let selection_cost = match selection {
                Selection::Field(field) => self.score_field(field)?,
                Selection::FragmentSpread(spread) => self.score_fragment_spread(spread)?,
                Selection::InlineFragment(inline) => self.score_selections(&inline.selections)?,
            };
            cost = cost.saturating_add(selection_cost);
        }
        Ok(cost)
    }

    fn score_children(
        &mut self,
        children: Option<&'doc [Selection<'src>]>,
    ) -> Result<i64, ComplexityError> {
        match children {
            Some(selections) => self.score_selections(selections),
            None => Ok(0),
        }
    }

    fn score_field(&mut self, field: &'doc Field<'src>) -> Result<i64, ComplexityError> {
        let name = field.name.as_str();
        if let Some(&cost) = self.overrides.get(name) {
            trace!(field = name, cost, "applying cost override");
            return Ok(cost);
        }

        let children = field.selection_set.as_deref();
        match name {
            "pageInfo" => Ok(0),
            "edges" => self.score_children(children),
            _ => {
                if let Some(count_argument) = pagination_argument(field) {
                    // Children first: an undefined variable deeper down wins
                    // over one on this field.
                    let child_cost = self.score_children(children)?;
                    let count = self.item_count(count_argument)?;
                    Ok(count.saturating_mul(child_cost).saturating_add(CONNECTION_COST))
                } else if let Some(children) = children {
                    Ok(self.score_selections(children)?.saturating_add(OBJECT_COST))
                } else {
                    Ok(0)
                }
            },
        }
    }

    /// Mutations cost [`MUTATION_BASE_COST`] plus, for each top-level payload
    /// field, the cost of what its direct children select. Neither the
    /// payload field nor its direct children pay [`OBJECT_COST`].
    ///
    /// Several payload fields in one mutation are scored independently and
    /// summed.
    fn score_mutation(
        &mut self,
        selections: &'doc [Selection<'src>],
    ) -> Result<i64, ComplexityError> {
        let mut cost = MUTATION_BASE_COST;
        for selection in selections {
            let Selection::Field(payload) = selection else {
                continue;
            };
            for child in payload.selection_set.as_deref().unwrap_or_default() {
                let child_cost = match child {
                    Selection::Field(field) => {
                        self.score_children(field.selection_set.as_deref())?
                    },
                    Selection::FragmentSpread(spread) => self.score_fragment_spread(spread)?,
                    Selection::InlineFragment(_) => 0,
                };
                cost = cost.saturating_add(child_cost);
            }
        }
        Ok(cost)
    }

    fn score_fragment_spread(
        &mut self,
        spread: &'doc FragmentSpread<'src>,
    ) -> Result<i64, ComplexityError> {
        let name = spread.name.as_str();
        let Some(fragment) = self.fragments.get(name) else {
            trace!(fragment = name, "ignoring spread of undefined fragment");
            return Ok(0);
        };
        if let Some(&cost) = self.fragment_costs.get(name) {
            return Ok(cost);
        }
        if self.spread_stack.contains(&name) {
            return Err(ComplexityError::FragmentCycle {
                name: name.to_string(),
            });
        }
        if self.depth >= MAX_SELECTION_DEPTH {
            return Err(ComplexityError::FragmentDepthExceeded {
                name: name.to_string(),
                max_depth: MAX_SELECTION_DEPTH,
            });
        }

        self.spread_stack.push(name);
        let cost = self.score_selections(&fragment.selections);
        self.spread_stack.pop();

        let cost = cost?;
        self.fragment_costs.insert(name, cost);
        Ok(cost)
    }

    /// Resolves the page size of a connection. Negative sizes count as zero.
    fn item_count(&self, argument: &Argument<'src>) -> Result<i64, ComplexityError> {
        let count = match &argument.value {
            Value::Primitive(primitive) => parse_literal_count(&primitive.raw),
            Value::Variable { name, .. } => {
                let name: &str = name;
                let Some(value) = self.variables.get(name) else {
                    return Err(ComplexityError::UndefinedVariable {
                        name: name.to_string(),
                    });
                };
                value.as_item_count().unwrap_or_else(|| {
                    trace!(variable = %name, "variable is not a number, counting no items");
                    0
                })
            },
            Value::Null { .. } | Value::List { .. } | Value::Object { .. } => 0,
        };
        Ok(count.max(0))
    }
}

/// The first `first` or `last` argument, in source order.
fn pagination_argument<'f, 'src>(field: &'f Field<'src>) -> Option<&'f Argument<'src>> {
    field
        .arguments
        .iter()
        .find(|argument| matches!(argument.name.as_str(), "first" | "last"))
}

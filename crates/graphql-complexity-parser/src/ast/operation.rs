use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Selection;
use inherent::inherent;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Maps an operation keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

/// A query, mutation or subscription. The shorthand `{ ... }` form is an
/// anonymous query.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation<'src> {
    pub kind: OperationKind,
    pub description: Option<String>,
    pub name: Option<Ident<'src>>,
    /// Variable definitions; each is located at its `$`.
    pub variables: Vec<InputValueDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    /// Location of the operation keyword, or of `{` for the shorthand form.
    pub location: Location,
}

#[inherent]
impl AstNode for Operation<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

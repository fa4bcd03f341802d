use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::Location;
use crate::ast::Selection;
use inherent::inherent;

/// `fragment Name on Type @dirs { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub description: Option<String>,
    pub name: Ident<'src>,
    pub type_condition: Ident<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    /// Location of the `fragment` keyword.
    pub location: Location,
}

#[inherent]
impl AstNode for FragmentDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::Location;
use inherent::inherent;

/// A named fragment spread (`...FragmentName`). Resolved by consumers, not by
/// the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub name: Ident<'src>,
    pub directives: Vec<Directive<'src>>,
    /// Location of the `...`.
    pub location: Location,
}

#[inherent]
impl AstNode for FragmentSpread<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

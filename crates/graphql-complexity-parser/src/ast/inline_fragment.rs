use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::Location;
use crate::ast::Selection;
use inherent::inherent;

/// An inline fragment: `... on Type @dirs { ... }`. The type condition is
/// optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<Ident<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    /// Location of the `...`.
    pub location: Location,
}

#[inherent]
impl AstNode for InlineFragment<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

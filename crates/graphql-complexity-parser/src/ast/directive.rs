use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Ident;
use crate::ast::Location;
use inherent::inherent;

/// A directive annotation such as `@include(if: $flag)`.
///
/// The name's location points at the `@`, not at the first letter of the
/// name.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Ident<'src>,
    pub arguments: Vec<Argument<'src>>,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn location(&self) -> Location {
        self.name.location
    }
}

use crate::ast::AstNode;
use crate::ast::Location;
use inherent::inherent;
use std::borrow::Cow;

/// A name together with the location it was read from.
#[derive(Clone, Debug, PartialEq)]
pub struct Ident<'src> {
    pub name: Cow<'src, str>,
    pub location: Location,
}

impl Ident<'_> {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

#[inherent]
impl AstNode for Ident<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

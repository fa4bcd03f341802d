use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::Location;
use crate::ast::Selection;
use inherent::inherent;

/// A field selection, optionally aliased: `alias: name(args) @dirs { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Ident<'src>>,
    pub name: Ident<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    /// `None` for a leaf (scalar) field. `Some(vec![])` for a written but
    /// empty `{}`.
    pub selection_set: Option<Vec<Selection<'src>>>,
    pub location: Location,
}

impl<'src> Field<'src> {
    /// First argument with the given name, in source order.
    pub fn argument(&self, name: &str) -> Option<&Argument<'src>> {
        self.arguments.iter().find(|arg| arg.name.name == name)
    }

    /// The name this field appears under in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

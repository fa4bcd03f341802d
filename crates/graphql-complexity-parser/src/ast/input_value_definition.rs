use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Ident;
use crate::ast::Location;
use crate::ast::TypeRef;
use crate::ast::Value;
use inherent::inherent;

/// `description? name: Type = default @dirs`
///
/// Used for operation variable definitions and exposed on its own through
/// [`GraphQLParser::parse_input_value_definition()`](crate::GraphQLParser::parse_input_value_definition).
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<String>,
    pub name: Ident<'src>,
    pub type_location: Location,
    pub value_type: TypeRef<'src>,
    /// Constant-only: variables are rejected here.
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for InputValueDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

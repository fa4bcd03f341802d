use crate::ast::Ident;
use crate::ast::Value;

/// One `name: value` pair in an argument list.
///
/// Argument lists keep source order and duplicates; lookups by name take the
/// first match.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Ident<'src>,
    pub value: Value<'src>,
}

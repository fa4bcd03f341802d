use crate::ast::AstNode;
use crate::ast::Ident;
use crate::ast::Location;
use inherent::inherent;
use std::borrow::Cow;

/// A literal value or variable reference.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    /// `$name`. The location points at the `$`.
    Variable {
        name: Cow<'src, str>,
        location: Location,
    },
    Primitive(PrimitiveValue<'src>),
    /// The identifier literal `null`.
    Null {
        location: Location,
    },
    List {
        items: Vec<Value<'src>>,
        location: Location,
    },
    Object {
        fields: Vec<ObjectField<'src>>,
        location: Location,
    },
}

#[inherent]
impl AstNode for Value<'_> {
    pub fn location(&self) -> Location {
        match self {
            Value::Variable { location, .. }
            | Value::Null { location }
            | Value::List { location, .. }
            | Value::Object { location, .. } => *location,
            Value::Primitive(primitive) => primitive.location,
        }
    }
}

/// Which lexical class a [`PrimitiveValue`] came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrimitiveKind {
    Int,
    Float,
    String,
    /// Any bare identifier other than `null`: enum values and the booleans
    /// `true`/`false`.
    Ident,
}

/// A scalar literal kept as its raw source text.
///
/// Strings keep their quotes and escapes. A negative number keeps its `-`
/// (`"-5"`), even when whitespace separated the sign from the digits.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveValue<'src> {
    pub kind: PrimitiveKind,
    pub raw: Cow<'src, str>,
    pub location: Location,
}

/// One `name: value` entry of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Ident<'src>,
    pub value: Value<'src>,
}

use crate::ast::Ident;
use std::fmt;

/// A type reference such as `Int`, `[Int]` or `[Int!]!`.
///
/// `!` wraps whatever was built before it, so `[Int]!` is
/// `NonNull(List(Named(Int)))` and `[Int!]` is `List(NonNull(Named(Int)))`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeRef<'src> {
    Named(Ident<'src>),
    List(Box<TypeRef<'src>>),
    NonNull(Box<TypeRef<'src>>),
}

impl<'src> TypeRef<'src> {
    /// The innermost named type.
    pub fn named_type(&self) -> &Ident<'src> {
        match self {
            TypeRef::Named(ident) => ident,
            TypeRef::List(of_type) | TypeRef::NonNull(of_type) => of_type.named_type(),
        }
    }
}

impl fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(ident) => write!(f, "{}", ident.name),
            TypeRef::List(of_type) => write!(f, "[{of_type}]"),
            TypeRef::NonNull(of_type) => write!(f, "{of_type}!"),
        }
    }
}

//! Executable-document AST produced by
//! [`GraphQLParser`](crate::GraphQLParser).
//!
//! Polymorphic nodes ([`Selection`], [`Value`], [`TypeRef`]) are closed enums;
//! consumers match on them exhaustively.

mod argument;
mod ast_node;
mod directive;
mod document;
mod field;
mod fragment_definition;
mod fragment_spread;
mod ident;
mod inline_fragment;
mod input_value_definition;
mod location;
mod operation;
mod selection;
mod type_ref;
mod value;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use directive::Directive;
pub use document::Document;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use ident::Ident;
pub use inline_fragment::InlineFragment;
pub use input_value_definition::InputValueDefinition;
pub use location::Location;
pub use operation::Operation;
pub use operation::OperationKind;
pub use selection::Selection;
pub use type_ref::TypeRef;
pub use value::ObjectField;
pub use value::PrimitiveKind;
pub use value::PrimitiveValue;
pub use value::Value;

use crate::ast::Location;

/// Trait implemented by every AST node that can be the subject of an error.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, giving
/// each node an inherent `location()` (no trait import needed) and a trait
/// bound for generic utilities such as diagnostics.
pub trait AstNode {
    /// The 1-based location of the first token of this node.
    fn location(&self) -> Location;
}

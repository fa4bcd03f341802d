use crate::ast::FragmentDefinition;
use crate::ast::Operation;

/// A parsed executable document: its operations and fragment definitions,
/// each in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document<'src> {
    pub operations: Vec<Operation<'src>>,
    pub fragments: Vec<FragmentDefinition<'src>>,
}

impl<'src> Document<'src> {
    /// The last fragment definition with the given name.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition<'src>> {
        self.fragments.iter().rev().find(|frag| frag.name.name == name)
    }
}

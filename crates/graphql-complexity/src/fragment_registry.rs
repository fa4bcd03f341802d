use crate::parser::ast::Document;
use crate::parser::ast::FragmentDefinition;
use std::collections::HashMap;

/// Fragment definitions of one document, looked up by name.
///
/// Built once per scoring call. When two definitions share a name, the one
/// that appears later in the document wins.
#[derive(Debug, Default)]
pub struct FragmentRegistry<'doc, 'src> {
    fragments: HashMap<&'doc str, &'doc FragmentDefinition<'src>>,
}

impl<'doc, 'src> FragmentRegistry<'doc, 'src> {
    pub fn from_document(document: &'doc Document<'src>) -> Self {
        let mut fragments = HashMap::with_capacity(document.fragments.len());
        for fragment in &document.fragments {
            fragments.insert(fragment.name.as_str(), fragment);
        }
        Self { fragments }
    }

    pub fn get(&self, name: &str) -> Option<&'doc FragmentDefinition<'src>> {
        self.fragments.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

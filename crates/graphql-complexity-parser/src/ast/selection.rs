use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Location;
use inherent::inherent;

/// One entry of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn location(&self) -> Location {
        match self {
            Selection::Field(field) => field.location,
            Selection::FragmentSpread(spread) => spread.location,
            Selection::InlineFragment(fragment) => fragment.location,
        }
    }
}

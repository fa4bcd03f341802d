use crate::ast::Location;

/// A point in the source as the lexer sees it. Every field is 0-based.
///
/// Columns are kept twice: in characters (`col_utf8`, so `'🎉'` counts
/// once) and in UTF-16 code units (`col_utf16`, where `'🎉'` counts twice)
/// for editors that index that way. AST nodes and error messages use the
/// 1-based [`Location`] from [`to_location()`](Self::to_location).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: Option<usize>,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: Option<usize>,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Characters since the start of the line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// UTF-16 code units since the start of the line, if the token source
    /// tracks them.
    pub fn col_utf16(&self) -> Option<usize> {
        self.col_utf16
    }

    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// 1-based line and character column.
    pub fn to_location(&self) -> Location {
        Location {
            line: self.line + 1,
            column: self.col_utf8 + 1,
        }
    }
}

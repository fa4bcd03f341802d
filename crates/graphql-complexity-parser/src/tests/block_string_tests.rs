//! Tests for `block_string_value()`.

use crate::block_string_value;
use proptest::prelude::*;

/// Common indentation is removed from every line but the first.
#[test]
fn strips_common_indentation() {
    let raw = "\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n  ";
    assert_eq!(block_string_value(raw), "Hello,\n  World!\n\nYours,\n  GraphQL.");
}

/// The first line is never dedented.
#[test]
fn first_line_keeps_indentation() {
    assert_eq!(block_string_value("  first\n    second"), "  first\nsecond");
}

/// Blank lines do not contribute to the common indentation.
#[test]
fn blank_lines_ignored_for_indentation() {
    assert_eq!(block_string_value("\n  a\n\n  b\n"), "a\n\nb");
}

/// A non-blank line without indentation disables dedenting.
#[test]
fn unindented_line_disables_dedent() {
    assert_eq!(block_string_value("\n  a\nb"), "  a\nb");
}

/// `\r\n` and `\r` are line terminators too.
#[test]
fn mixed_line_terminators() {
    assert_eq!(block_string_value("\r\n  a\r  b\r\n"), "a\nb");
}

/// Tabs count as indentation.
#[test]
fn tabs_are_indentation() {
    assert_eq!(block_string_value("\n\ta\n\t\tb"), "a\n\tb");
}

/// Whitespace-only input collapses to the empty string.
#[test]
fn whitespace_only() {
    assert_eq!(block_string_value("  \n \t \n"), "");
    assert_eq!(block_string_value(""), "");
}

proptest! {
    /// The result never starts or ends with a blank line, and never contains
    /// a carriage return.
    #[test]
    fn no_leading_or_trailing_blank_lines(raw in "[ \t\r\na-z]{0,64}") {
        let value = block_string_value(&raw);
        prop_assert!(!value.contains('\r'));
        if !value.is_empty() {
            let lines: Vec<&str> = value.split('\n').collect();
            prop_assert!(!lines[0].trim_matches([' ', '\t']).is_empty());
            prop_assert!(!lines[lines.len() - 1].trim_matches([' ', '\t']).is_empty());
        }
    }

    /// Text without line terminators comes back unchanged unless it is blank.
    #[test]
    fn single_line_is_identity(raw in "[ \ta-z]{0,32}") {
        let value = block_string_value(&raw);
        if raw.trim_matches([' ', '\t']).is_empty() {
            prop_assert_eq!(value, "");
        } else {
            prop_assert_eq!(value, raw);
        }
    }
}

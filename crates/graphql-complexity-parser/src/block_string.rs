//! The "block string value" transform applied to the body of a triple-quoted
//! string.
//!
//! This is a pure text function with no token awareness: callers strip the
//! surrounding `"""` delimiters (and un-escape `\"""`) before calling
//! [`block_string_value()`].

/// Produces the canonical value of a block string from its raw inter-quote
/// text.
///
/// The algorithm:
/// 1. Split into lines (`\n`, `\r\n` and `\r` all terminate a line).
/// 2. Find the common indentation: the smallest count of leading spaces and
///    tabs over every line *except the first*, ignoring lines made up only of
///    whitespace.
/// 3. Strip that many leading characters from every line except the first.
///    A whitespace-only line shorter than the indent becomes empty.
/// 4. Drop leading and trailing whitespace-only lines.
/// 5. Rejoin with `\n`.
pub fn block_string_value(raw: &str) -> String {
    let mut lines: Vec<&str> = split_lines(raw);

    let indent = common_indentation(&lines);
    if indent > 0 {
        for line in lines.iter_mut().skip(1) {
            // Every line that survives the common-indent scan starts with at
            // least `indent` ASCII whitespace bytes, so this slice is always
            // on a char boundary.
            *line = line.get(indent..).unwrap_or("");
        }
    }

    let leading_blank = lines
        .iter()
        .take_while(|line| is_blank(line))
        .count();
    lines.drain(..leading_blank);

    while lines.len() > 1 && lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }

    lines.join("\n")
}

/// Returns the number of leading characters shared by every non-blank line
/// after the first.
fn common_indentation(lines: &[&str]) -> usize {
    let mut common: Option<usize> = None;
    for line in lines.iter().skip(1) {
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        if indent == 0 {
            return 0;
        }
        common = Some(common.map_or(indent, |c| c.min(indent)));
    }
    common.unwrap_or(0)
}

fn split_lines(raw: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = raw.as_bytes();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&raw[line_start..i]);
                line_start = i + 1;
            },
            b'\r' => {
                lines.push(&raw[line_start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                line_start = i + 1;
            },
            _ => (),
        }
        i += 1;
    }
    lines.push(&raw[line_start..]);
    lines
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count()
}

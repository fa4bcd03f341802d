//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) over a
//! `&str`.
//!
//! Names, numbers and strings are `Cow::Borrowed` slices of the input. `#`
//! comments and commas become trivia on the token that follows them, which
//! is where the parser reads description comments from. Invalid input turns
//! into an `Error` token and lexing carries on after it.
//!
//! Names are unicode-aware: `_` or any alphabetic character, followed by
//! `_` or alphanumerics.
//!
//! ```rust
//! use graphql_complexity_parser::token_source::StrGraphQLTokenSource;
//!
//! let lexer = StrGraphQLTokenSource::new("{ name }");
//! let kinds: Vec<_> = lexer.map(|token| token.kind).collect();
//! assert_eq!(kinds.len(), 4);
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTriviaToken;
use crate::token::GraphQLTriviaTokenVec;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use smallvec::smallvec;
use std::borrow::Cow;

/// Message for a string literal that reaches a raw line terminator (single
/// quoted) or the end of input before its closing quote.
pub(crate) const UNTERMINATED_LITERAL: &str = "literal not terminated";

/// Read position within the source.
#[derive(Clone, Copy, Debug, Default)]
struct Cursor {
    byte: usize,
    /// 0-based.
    line: usize,
    /// Characters since the start of the line.
    column: usize,
    /// UTF-16 code units since the start of the line.
    column_utf16: usize,
    /// Set right after a `\r`, so a following `\n` doesn't start another
    /// line.
    after_cr: bool,
}

impl Cursor {
    fn step(&mut self, ch: char) {
        self.byte += ch.len_utf8();
        match ch {
            '\n' if self.after_cr => self.after_cr = false,
            '\n' | '\r' => {
                self.line += 1;
                self.column = 0;
                self.column_utf16 = 0;
                self.after_cr = ch == '\r';
            },
            _ => {
                self.column += 1;
                self.column_utf16 += ch.len_utf16();
                self.after_cr = false;
            },
        }
    }

    /// Moves past `text`, which must not contain a line terminator.
    fn skip_inline(&mut self, text: &str) {
        self.byte += text.len();
        self.column += text.chars().count();
        self.column_utf16 += text.encode_utf16().count();
        self.after_cr = false;
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, Some(self.column_utf16), self.byte)
    }
}

/// Lexes a `&str` into [`GraphQLToken`]s, ending with a single `Eof`.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,
    cursor: Cursor,
    /// Comments and commas seen since the last token.
    trivia: GraphQLTriviaTokenVec<'src>,
    done: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            cursor: Cursor::default(),
            trivia: smallvec![],
            done: false,
        }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.cursor.byte..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.cursor.step(ch);
        Some(ch)
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// The source text from byte `from` up to the cursor.
    fn text_since(&self, from: usize) -> &'src str {
        &self.source[from..self.cursor.byte]
    }

    /// Builds a token spanning `start` to the cursor, taking the pending
    /// trivia with it.
    fn emit(&mut self, kind: GraphQLTokenKind<'src>, start: SourcePosition) -> GraphQLToken<'src> {
        GraphQLToken {
            kind,
            preceding_trivia: std::mem::take(&mut self.trivia),
            span: GraphQLSourceSpan::new(start, self.cursor.position()),
        }
    }

    fn scan(&mut self) -> GraphQLToken<'src> {
        loop {
            // Commas are handled below so they can be kept as trivia.
            self.bump_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));

            let start = self.cursor.position();
            let Some(ch) = self.peek() else {
                return self.emit(GraphQLTokenKind::Eof, start);
            };

            if let Some(kind) = punctuator(ch) {
                self.bump();
                return self.emit(kind, start);
            }
            match ch {
                '#' => self.comment(start),
                ',' => {
                    self.bump();
                    let span = GraphQLSourceSpan::new(start, self.cursor.position());
                    self.trivia.push(GraphQLTriviaToken::Comma { span });
                },
                '.' => return self.dots(start),
                '"' => return self.string(start),
                c if is_name_start(c) => return self.name(start),
                c if c.is_ascii_digit() => return self.number(start),
                c => {
                    self.bump();
                    let message = format!("Unexpected character {}", describe_char(c));
                    return self.emit(GraphQLTokenKind::error(message), start);
                },
            }
        }
    }

    /// `#` up to, not including, the next line terminator.
    fn comment(&mut self, start: SourcePosition) {
        self.bump();
        let rest = self.rest();
        let len = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let value = &rest[..len];
        self.cursor.skip_inline(value);

        let span = GraphQLSourceSpan::new(start, self.cursor.position());
        self.trivia.push(GraphQLTriviaToken::Comment {
            value: Cow::Borrowed(value),
            span,
        });
    }

    /// `...`, or an error for one or two dots.
    fn dots(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let rest = self.rest();
        let kind = if rest.starts_with("...") {
            self.bump_n(3);
            GraphQLTokenKind::Ellipsis
        } else if rest.starts_with("..") {
            self.bump_n(2);
            GraphQLTokenKind::error("Unexpected `..` (use `...` for spread operator)")
        } else {
            self.bump();
            GraphQLTokenKind::error("Unexpected `.`")
        };
        self.emit(kind, start)
    }

    /// Keywords are plain names here.
    fn name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let from = self.cursor.byte;
        self.bump();
        self.bump_while(is_name_continue);
        let name = self.text_since(from);
        self.emit(GraphQLTokenKind::name_borrowed(name), start)
    }

    /// `0 | [1-9][0-9]*`, then an optional `.[0-9]+` fraction and an optional
    /// `[eE][+-]?[0-9]+` exponent. The sign is a separate `Minus` token.
    fn number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let from = self.cursor.byte;

        if self.bump() == Some('0') && self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            return self.bad_number(start, from, "Invalid number: leading zeros are not allowed");
        }
        self.bump_while(|ch| ch.is_ascii_digit());

        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|ch| ch.is_ascii_digit()) {
            is_float = true;
            self.bump();
            self.bump_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if !self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.bad_number(
                    start,
                    from,
                    "Invalid number: exponent must have at least one digit",
                );
            }
            self.bump_while(|ch| ch.is_ascii_digit());
        }

        let text = self.text_since(from);
        let kind = if is_float {
            GraphQLTokenKind::float_value_borrowed(text)
        } else {
            GraphQLTokenKind::int_value_borrowed(text)
        };
        self.emit(kind, start)
    }

    /// Swallows the rest of a malformed number so lexing resumes after it.
    fn bad_number(&mut self, start: SourcePosition, from: usize, message: &str) -> GraphQLToken<'src> {
        self.bump_while(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
        let message = format!("{message}: `{}`", self.text_since(from));
        self.emit(GraphQLTokenKind::error(message), start)
    }

    /// A `"..."` string, which may not contain a raw line terminator, or a
    /// block string.
    fn string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let from = self.cursor.byte;
        if self.rest().starts_with("\"\"\"") {
            return self.block_string(start, from);
        }

        self.bump();
        loop {
            match self.peek() {
                None | Some('\n' | '\r') => {
                    return self.emit(GraphQLTokenKind::error(UNTERMINATED_LITERAL), start);
                },
                Some('"') => {
                    self.bump();
                    break;
                },
                Some('\\') => {
                    self.bump();
                    if !matches!(self.peek(), None | Some('\n' | '\r')) {
                        self.bump();
                    }
                },
                Some(_) => {
                    self.bump();
                },
            }
        }

        let text = self.text_since(from);
        self.emit(GraphQLTokenKind::string_value_borrowed(text), start)
    }

    /// `"""` ... `"""`. Only `\"""` is an escape.
    fn block_string(&mut self, start: SourcePosition, from: usize) -> GraphQLToken<'src> {
        self.bump_n(3);
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return self.emit(GraphQLTokenKind::error(UNTERMINATED_LITERAL), start);
            }
            if rest.starts_with("\\\"\"\"") {
                self.bump_n(4);
            } else if rest.starts_with("\"\"\"") {
                self.bump_n(3);
                break;
            } else {
                self.bump();
            }
        }

        let text = self.text_since(from);
        self.emit(GraphQLTokenKind::string_value_borrowed(text), start)
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.scan();
        self.done = token.kind == GraphQLTokenKind::Eof;
        Some(token)
    }
}

fn punctuator<'src>(ch: char) -> Option<GraphQLTokenKind<'src>> {
    Some(match ch {
        '!' => GraphQLTokenKind::Bang,
        '$' => GraphQLTokenKind::Dollar,
        '(' => GraphQLTokenKind::ParenOpen,
        ')' => GraphQLTokenKind::ParenClose,
        ':' => GraphQLTokenKind::Colon,
        '=' => GraphQLTokenKind::Equals,
        '@' => GraphQLTokenKind::At,
        '[' => GraphQLTokenKind::SquareBracketOpen,
        ']' => GraphQLTokenKind::SquareBracketClose,
        '{' => GraphQLTokenKind::CurlyBraceOpen,
        '}' => GraphQLTokenKind::CurlyBraceClose,
        '-' => GraphQLTokenKind::Minus,
        _ => return None,
    })
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// `ch` in backticks, plus its code point if it's invisible.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') {
        format!("`{}` (U+{:04X})", ch.escape_default(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}

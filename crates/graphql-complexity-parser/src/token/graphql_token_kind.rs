use crate::block_string::block_string_value;
use crate::GraphQLStringParsingError;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// What a token is.
///
/// Literals keep their raw source text, borrowed from the input where the
/// token source can. Numbers are unsigned: `-` is its own
/// [`Minus`](Self::Minus) token and the parser joins it to the number that
/// follows. `true`, `false` and `null` are plain [`Name`](Self::Name)s.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    At,
    Bang,
    Colon,
    CurlyBraceClose,
    CurlyBraceOpen,
    Dollar,
    Ellipsis,
    Equals,
    Minus,
    ParenClose,
    ParenOpen,
    SquareBracketClose,
    SquareBracketOpen,

    Name(Cow<'src, str>),
    /// e.g. `0`, `123`
    IntValue(Cow<'src, str>),
    /// e.g. `1.5`, `6.02e23`
    FloatValue(Cow<'src, str>),
    /// Quotes included, block strings too. See
    /// [`parse_string_value()`](Self::parse_string_value).
    StringValue(Cow<'src, str>),

    /// Always the last token. Carries any trailing trivia.
    Eof,

    /// Input the token source could not make sense of. The parser fails as
    /// soon as it reaches one.
    Error {
        message: String,
    },
}

const PUNCTUATORS: [(GraphQLTokenKind<'static>, &str); 13] = [
    (GraphQLTokenKind::At, "@"),
    (GraphQLTokenKind::Bang, "!"),
    (GraphQLTokenKind::Colon, ":"),
    (GraphQLTokenKind::CurlyBraceClose, "}"),
    (GraphQLTokenKind::CurlyBraceOpen, "{"),
    (GraphQLTokenKind::Dollar, "$"),
    (GraphQLTokenKind::Ellipsis, "..."),
    (GraphQLTokenKind::Equals, "="),
    (GraphQLTokenKind::Minus, "-"),
    (GraphQLTokenKind::ParenClose, ")"),
    (GraphQLTokenKind::ParenOpen, "("),
    (GraphQLTokenKind::SquareBracketClose, "]"),
    (GraphQLTokenKind::SquareBracketOpen, "["),
];

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        Self::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn name_owned(s: String) -> Self {
        Self::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn int_value_borrowed(s: &'src str) -> Self {
        Self::IntValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_value_borrowed(s: &'src str) -> Self {
        Self::FloatValue(Cow::Borrowed(s))
    }

    /// `s` must include the quotes.
    #[inline]
    pub fn string_value_borrowed(s: &'src str) -> Self {
        Self::StringValue(Cow::Borrowed(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// The punctuator's text, e.g. `"..."` for `Ellipsis`.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        PUNCTUATORS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, text)| *text)
    }

    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The text shown for this token in "unexpected ..." messages. Empty for
    /// `Eof`.
    pub fn source_text(&self) -> &str {
        match self {
            Self::Name(raw)
            | Self::IntValue(raw)
            | Self::FloatValue(raw)
            | Self::StringValue(raw) => raw,
            Self::Error { message } => message,
            Self::Eof => "",
            punctuator => punctuator.as_punctuator_str().unwrap_or_default(),
        }
    }

    /// `None` unless this is an `IntValue`.
    pub fn parse_int_value(&self) -> Option<Result<i64, ParseIntError>> {
        let Self::IntValue(raw) = self else {
            return None;
        };
        Some(raw.parse())
    }

    /// `None` unless this is a `FloatValue`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        let Self::FloatValue(raw) = self else {
            return None;
        };
        Some(raw.parse())
    }

    /// The value of a `StringValue`, or `None` for other kinds.
    ///
    /// `"..."` strings unescape `\n \r \t \\ \" \/ \b \f`, `\uXXXX` and
    /// `\u{X...}`. Block strings only unescape `\"""` and are then run through
    /// [`block_string_value()`](crate::block_string_value).
    pub fn parse_string_value(&self) -> Option<Result<String, GraphQLStringParsingError>> {
        let Self::StringValue(raw) = self else {
            return None;
        };
        Some(cook_graphql_string(raw))
    }
}

/// The runtime value of a string literal's raw text, quotes included.
pub(crate) fn cook_graphql_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if let Some(block) = raw.strip_prefix("\"\"\"") {
        let content = block
            .strip_suffix("\"\"\"")
            .ok_or(GraphQLStringParsingError::UnterminatedString)?;
        return Ok(block_string_value(&content.replace("\\\"\"\"", "\"\"\"")));
    }

    let mut rest = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;
    let mut cooked = String::with_capacity(rest.len());
    while let Some(backslash) = rest.find('\\') {
        cooked.push_str(&rest[..backslash]);
        rest = &rest[backslash + 1..];

        let mut chars = rest.chars();
        let escaped = match chars.next() {
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('\\') => '\\',
            Some('"') => '"',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('u') => {
                let (ch, after) = unicode_escape(chars.as_str())?;
                cooked.push(ch);
                rest = after;
                continue;
            },
            Some(other) => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!("\\{other}")));
            },
            None => {
                return Err(GraphQLStringParsingError::InvalidEscapeSequence("\\".to_string()));
            },
        };
        cooked.push(escaped);
        rest = chars.as_str();
    }
    cooked.push_str(rest);
    Ok(cooked)
}

/// Decodes what follows `\u`: either `{X...}` or exactly four hex digits.
/// Returns the char and the text after the escape.
fn unicode_escape(after_u: &str) -> Result<(char, &str), GraphQLStringParsingError> {
    let (hex, rest, display) = match after_u.strip_prefix('{') {
        Some(braced) => {
            let Some(close) = braced.find('}') else {
                return Err(GraphQLStringParsingError::InvalidUnicodeEscape(format!("\\u{{{braced}")));
            };
            let hex = &braced[..close];
            (hex, &braced[close + 1..], format!("\\u{{{hex}}}"))
        },
        None => {
            let end = after_u
                .char_indices()
                .nth(4)
                .map_or(after_u.len(), |(i, _)| i);
            let hex = &after_u[..end];
            (hex, &after_u[end..], format!("\\u{hex}"))
        },
    };

    let is_fixed_width = !after_u.starts_with('{');
    let well_formed = !hex.is_empty()
        && hex.chars().all(|c| c.is_ascii_hexdigit())
        && (!is_fixed_width || hex.len() == 4);
    if !well_formed {
        return Err(GraphQLStringParsingError::InvalidUnicodeEscape(display));
    }
    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .map(|ch| (ch, rest))
        .ok_or(GraphQLStringParsingError::InvalidUnicodeEscape(display))
}

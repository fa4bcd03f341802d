//! Recursive descent parser for GraphQL executable documents.
//!
//! [`GraphQLParser`] works with any token source implementing
//! [`GraphQLTokenSource`]. Every `parse_*` method consumes exactly the tokens
//! of the construct it names and leaves the stream on the first token after
//! it.
//!
//! # Errors
//!
//! Parsing stops at the first problem. Lexer `Error` tokens become
//! [`GraphQLParseErrorKind::LexerError`] the moment the parser looks at them.
//! Every other failure names the token it found and what it was expecting,
//! e.g. `unexpected "1", expecting ":"`.
//!
//! # Descriptions
//!
//! [`parse_description()`](GraphQLParser::parse_description) reads either the
//! string literal in front of a construct or the `#` comments in front of it,
//! depending on [`use_string_descriptions()`](GraphQLParser::use_string_descriptions).

use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::Ident;
use crate::ast::InlineFragment;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::ObjectField;
use crate::ast::Operation;
use crate::ast::OperationKind;
use crate::ast::PrimitiveKind;
use crate::ast::PrimitiveValue;
use crate::ast::Selection;
use crate::ast::TypeRef;
use crate::ast::Value;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;
use std::borrow::Cow;

/// What a top-level definition starts with.
enum DefinitionStart {
    /// `{ ... }` shorthand query.
    Shorthand,
    Operation(OperationKind),
    Fragment,
    Other,
}

/// A recursive descent parser over a stream of [`GraphQLToken`]s.
///
/// # Example
///
/// ```
/// use graphql_complexity_parser::GraphQLParser;
///
/// let document = GraphQLParser::new("query Q { viewer { id } }")
///     .parse_executable_document()
///     .unwrap();
/// assert_eq!(document.operations.len(), 1);
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    /// The underlying token stream with lookahead support.
    token_stream: GraphQLTokenStream<'src, TTokenSource>,

    /// Shared nesting depth counter for values, type references and
    /// selection sets.
    recursion_depth: usize,

    /// End position of the most recently consumed token. Anchors errors that
    /// hit the end of the stream.
    last_end_position: Option<SourcePosition>,

    /// Whether descriptions come from string literals (`true`) or from `#`
    /// comments (`false`).
    use_string_descriptions: bool,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    ///
    /// Accepts any type that can be referenced as a `str`, including `&str`,
    /// `&String`, and `&Cow<str>`.
    pub fn new<S: AsRef<str> + ?Sized>(
        source: &'src S,
    ) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Maximum nesting depth for recursive parsing (values, selection sets
    /// and type references).
    ///
    /// Keeps adversarial inputs like `[[[[[...` or `{a{a{a{...` from
    /// overflowing the stack, including in debug builds.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a new parser from a token source.
    pub fn from_token_source(
        token_source: TTokenSource,
    ) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            recursion_depth: 0,
            last_end_position: None,
            use_string_descriptions: false,
        }
    }

    /// Selects where descriptions come from.
    ///
    /// With `false` (the default), a description is the block of `#` comments
    /// directly in front of a construct. With `true`, it is the string or
    /// block string literal in front of it. Either way a leading string
    /// literal is consumed.
    pub fn use_string_descriptions(mut self, enabled: bool) -> Self {
        self.use_string_descriptions = enabled;
        self
    }

    /// Returns `true` once only `Eof` remains.
    pub fn is_at_end(&mut self) -> bool {
        self.token_stream.is_at_end()
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Peeks at the next token, surfacing lexer errors.
    fn peek_token(&mut self) -> Result<&GraphQLToken<'src>, GraphQLParseError> {
        match self.token_stream.peek() {
            None => Err(Self::unexpected_eof(
                "token",
                Self::span_after(&self.last_end_position),
            )),
            Some(token) => match &token.kind {
                GraphQLTokenKind::Error { message } => Err(
                    GraphQLParseError::from_lexer_error(message.clone(), token.span.clone()),
                ),
                _ => Ok(token),
            },
        }
    }

    /// Location of the next token.
    fn peek_location(&mut self) -> Result<Location, GraphQLParseError> {
        Ok(self.peek_token()?.span.start_inclusive.to_location())
    }

    /// Checks if the next token matches the given kind without consuming.
    fn peek_is(&mut self, kind: &GraphQLTokenKind) -> bool {
        match self.token_stream.peek() {
            Some(token) => Self::token_kinds_match(&token.kind, kind),
            None => false,
        }
    }

    fn peek_is_name(&mut self) -> bool {
        matches!(
            self.token_stream.peek().map(|t| &t.kind),
            Some(GraphQLTokenKind::Name(_)),
        )
    }

    /// Checks if the next token is the given keyword without consuming.
    fn peek_is_keyword(&mut self, keyword: &str) -> bool {
        match self.token_stream.peek().map(|t| &t.kind) {
            Some(GraphQLTokenKind::Name(name)) => name == keyword,
            _ => false,
        }
    }

    /// Consumes the next token from the stream and tracks its end position.
    fn consume_token(
        &mut self,
    ) -> Option<GraphQLToken<'src>> {
        let token = self.token_stream.consume();
        if let Some(ref t) = token {
            self.last_end_position = Some(t.span.end_exclusive.clone());
        }
        token
    }

    /// Consumes the next token, which the caller has already peeked.
    fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        match self.consume_token() {
            Some(token) => Ok(token),
            None => Err(self.unexpected("token")),
        }
    }

    /// Expects a specific token kind and consumes it.
    fn expect(
        &mut self,
        expected_kind: &GraphQLTokenKind,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek_is(expected_kind) {
            self.advance()
        } else {
            Err(self.unexpected(&Self::expectation_display(expected_kind)))
        }
    }

    /// Expects a name token and returns it as an [`Ident`] located at the
    /// token.
    fn expect_ident(&mut self) -> Result<Ident<'src>, GraphQLParseError> {
        if !self.peek_is_name() {
            return Err(self.unexpected("Name"));
        }
        match self.advance()? {
            GraphQLToken {
                kind: GraphQLTokenKind::Name(name),
                span,
                ..
            } => Ok(Ident {
                name,
                location: span.start_inclusive.to_location(),
            }),
            _ => Err(self.unexpected("Name")),
        }
    }

    /// Expects a specific keyword (a Name token with specific text).
    fn expect_keyword(&mut self, keyword: &str) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.peek_is_keyword(keyword) {
            self.advance()
        } else {
            Err(self.unexpected(&format!("{keyword:?}")))
        }
    }

    /// Builds the error for an unexpected next token.
    ///
    /// `expected` is shown verbatim after "expecting".
    fn unexpected(&mut self, expected: &str) -> GraphQLParseError {
        match self.token_stream.peek() {
            None => Self::unexpected_eof(
                expected,
                Self::span_after(&self.last_end_position),
            ),
            Some(token) => match &token.kind {
                GraphQLTokenKind::Error { message } => {
                    GraphQLParseError::from_lexer_error(message.clone(), token.span.clone())
                },
                GraphQLTokenKind::Eof => Self::unexpected_eof(expected, token.span.clone()),
                kind => {
                    let found = kind.source_text().to_string();
                    GraphQLParseError::new(
                        format!("unexpected {found:?}, expecting {expected}"),
                        token.span.clone(),
                        GraphQLParseErrorKind::UnexpectedToken {
                            expected: vec![expected.to_string()],
                            found,
                        },
                    )
                },
            },
        }
    }

    fn unexpected_eof(expected: &str, span: GraphQLSourceSpan) -> GraphQLParseError {
        GraphQLParseError::new(
            format!("unexpected <EOF>, expecting {expected}"),
            span,
            GraphQLParseErrorKind::UnexpectedEof {
                expected: vec![expected.to_string()],
            },
        )
    }

    /// A zero-width span just after the last consumed token.
    fn span_after(last_end_position: &Option<SourcePosition>) -> GraphQLSourceSpan {
        let pos = last_end_position
            .clone()
            .unwrap_or_else(|| SourcePosition::new(0, 0, Some(0), 0));
        GraphQLSourceSpan::empty_at(pos)
    }

    /// How an expected token kind is named in error messages.
    fn expectation_display(kind: &GraphQLTokenKind) -> String {
        if let Some(punctuator) = kind.as_punctuator_str() {
            return format!("{punctuator:?}");
        }
        match kind {
            GraphQLTokenKind::Name(_) => "Name",
            GraphQLTokenKind::IntValue(_) => "Int",
            GraphQLTokenKind::FloatValue(_) => "Float",
            GraphQLTokenKind::StringValue(_) => "String",
            GraphQLTokenKind::Eof => "<EOF>",
            _ => "token",
        }
        .to_string()
    }

    /// Compares token kinds for equality, ignoring payload for variant
    /// matching.
    ///
    /// Uses an exhaustive match on `actual` so that a new
    /// `GraphQLTokenKind` variant forces this function to be revisited.
    fn token_kinds_match(
        actual: &GraphQLTokenKind,
        expected: &GraphQLTokenKind,
    ) -> bool {
        match actual {
            GraphQLTokenKind::Name(_) => matches!(expected, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => {
                matches!(expected, GraphQLTokenKind::IntValue(_))
            },
            GraphQLTokenKind::FloatValue(_) => {
                matches!(expected, GraphQLTokenKind::FloatValue(_))
            },
            GraphQLTokenKind::StringValue(_) => {
                matches!(expected, GraphQLTokenKind::StringValue(_))
            },
            GraphQLTokenKind::Error { .. } => {
                matches!(expected, GraphQLTokenKind::Error { .. })
            },
            GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::Minus
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::Eof => actual == expected,
        }
    }

    /// Checks recursion depth and returns an error if the limit is exceeded.
    /// On success, increments the depth counter; the caller must call
    /// `exit_recursion()` when done.
    fn enter_recursion(&mut self) -> Result<(), GraphQLParseError> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let span = match self.token_stream.peek() {
                Some(token) => token.span.clone(),
                None => Self::span_after(&self.last_end_position),
            };
            return Err(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                span,
                GraphQLParseErrorKind::RecursionLimitExceeded,
            ));
        }
        self.recursion_depth += 1;
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    // =========================================================================
    // Descriptions
    // =========================================================================

    /// Reads the description in front of the next construct.
    ///
    /// A string or block string literal in front of the construct is always
    /// consumed. In string-description mode its unescaped value is returned
    /// (`None` when there is no literal). Otherwise the `#` comments in front
    /// of the next token are returned, joined with `\n`, and the literal is
    /// discarded.
    pub fn parse_description(&mut self) -> Result<Option<String>, GraphQLParseError> {
        let token = self.peek_token()?;
        let comment_block = token.preceding_comment_block();
        let has_string = matches!(token.kind, GraphQLTokenKind::StringValue(_));

        let string_description = if has_string {
            let token = self.advance()?;
            match token.kind.parse_string_value() {
                Some(Ok(value)) => Some(value),
                Some(Err(err)) => {
                    return Err(GraphQLParseError::new(
                        err.to_string(),
                        token.span,
                        GraphQLParseErrorKind::InvalidString(err),
                    ));
                },
                None => None,
            }
        } else {
            None
        };

        if self.use_string_descriptions {
            Ok(string_description)
        } else {
            Ok(comment_block)
        }
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses `Type := '[' Type ']' | Name` followed by an optional `!`.
    pub fn parse_type(&mut self) -> Result<TypeRef<'src>, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_type_impl();
        self.exit_recursion();
        result
    }

    fn parse_type_impl(&mut self) -> Result<TypeRef<'src>, GraphQLParseError> {
        let base = if self.peek_is(&GraphQLTokenKind::SquareBracketOpen) {
            self.advance()?;
            let of_type = self.parse_type()?;
            self.expect(&GraphQLTokenKind::SquareBracketClose)?;
            TypeRef::List(Box::new(of_type))
        } else {
            TypeRef::Named(self.expect_ident()?)
        };

        if self.peek_is(&GraphQLTokenKind::Bang) {
            self.advance()?;
            Ok(TypeRef::NonNull(Box::new(base)))
        } else {
            Ok(base)
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value (literal or variable reference).
    ///
    /// With `const_only`, a `$variable` is rejected with
    /// [`GraphQLParseErrorKind::VariableNotAllowed`].
    pub fn parse_value(&mut self, const_only: bool) -> Result<Value<'src>, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_value_impl(const_only);
        self.exit_recursion();
        result
    }

    fn parse_value_impl(&mut self, const_only: bool) -> Result<Value<'src>, GraphQLParseError> {
        let token = self.peek_token()?;
        let location = token.span.start_inclusive.to_location();

        let kind = match &token.kind {
            GraphQLTokenKind::Dollar => return self.parse_variable(const_only, location),
            GraphQLTokenKind::Minus => return self.parse_negative_number(location),
            GraphQLTokenKind::SquareBracketOpen => {
                return self.parse_list_value(const_only, location);
            },
            GraphQLTokenKind::CurlyBraceOpen => {
                return self.parse_object_value(const_only, location);
            },
            GraphQLTokenKind::Name(name) if name == "null" => {
                self.advance()?;
                return Ok(Value::Null { location });
            },
            GraphQLTokenKind::Name(_) => PrimitiveKind::Ident,
            GraphQLTokenKind::IntValue(_) => PrimitiveKind::Int,
            GraphQLTokenKind::FloatValue(_) => PrimitiveKind::Float,
            GraphQLTokenKind::StringValue(_) => PrimitiveKind::String,
            _ => return Err(self.unexpected("value").with_message("invalid value")),
        };

        let raw = Self::literal_text(self.advance()?);
        Ok(Value::Primitive(PrimitiveValue {
            kind,
            raw,
            location,
        }))
    }

    /// Moves the raw text out of a literal token.
    fn literal_text(token: GraphQLToken<'src>) -> Cow<'src, str> {
        match token.kind {
            GraphQLTokenKind::Name(raw)
            | GraphQLTokenKind::IntValue(raw)
            | GraphQLTokenKind::FloatValue(raw)
            | GraphQLTokenKind::StringValue(raw) => raw,
            other => Cow::Owned(other.source_text().to_string()),
        }
    }

    fn parse_variable(
        &mut self,
        const_only: bool,
        location: Location,
    ) -> Result<Value<'src>, GraphQLParseError> {
        if const_only {
            let span = self.peek_token()?.span.clone();
            return Err(GraphQLParseError::new(
                "variable not allowed",
                span,
                GraphQLParseErrorKind::VariableNotAllowed,
            ));
        }
        self.expect(&GraphQLTokenKind::Dollar)?;
        let name = self.expect_ident()?;
        Ok(Value::Variable {
            name: name.name,
            location,
        })
    }

    /// `'-' (Int | Float)`. The sign is glued onto the raw text.
    fn parse_negative_number(&mut self, location: Location) -> Result<Value<'src>, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::Minus)?;

        let kind = match self.token_stream.peek().map(|t| &t.kind) {
            Some(GraphQLTokenKind::IntValue(_)) => PrimitiveKind::Int,
            Some(GraphQLTokenKind::FloatValue(_)) => PrimitiveKind::Float,
            _ => return Err(self.unexpected("number")),
        };
        let digits = Self::literal_text(self.advance()?);

        Ok(Value::Primitive(PrimitiveValue {
            kind,
            raw: Cow::Owned(format!("-{digits}")),
            location,
        }))
    }

    fn parse_list_value(
        &mut self,
        const_only: bool,
        location: Location,
    ) -> Result<Value<'src>, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::SquareBracketOpen)?;
        let mut items = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::SquareBracketClose) {
            items.push(self.parse_value(const_only)?);
        }
        self.advance()?;
        Ok(Value::List { items, location })
    }

    fn parse_object_value(
        &mut self,
        const_only: bool,
        location: Location,
    ) -> Result<Value<'src>, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut fields = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let name = self.expect_ident()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(const_only)?;
            fields.push(ObjectField { name, value });
        }
        self.advance()?;
        Ok(Value::Object { fields, location })
    }

    // =========================================================================
    // Arguments, directives, input values
    // =========================================================================

    /// Parses `'(' (Name ':' Value)* ')'`. An empty `()` yields no arguments.
    pub fn parse_arguments(&mut self) -> Result<Vec<Argument<'src>>, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut arguments = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            let name = self.expect_ident()?;
            self.expect(&GraphQLTokenKind::Colon)?;
            let value = self.parse_value(false)?;
            arguments.push(Argument { name, value });
        }
        self.advance()?;
        Ok(arguments)
    }

    /// Parses `('@' Name Arguments?)*`.
    ///
    /// Each directive name's column is moved back by one so the location
    /// points at the `@`.
    pub fn parse_directives(&mut self) -> Result<Vec<Directive<'src>>, GraphQLParseError> {
        let mut directives = Vec::new();
        while self.peek_is(&GraphQLTokenKind::At) {
            self.advance()?;
            let mut name = self.expect_ident()?;
            name.location.column = name.location.column.saturating_sub(1);
            let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
                self.parse_arguments()?
            } else {
                Vec::new()
            };
            directives.push(Directive { name, arguments });
        }
        Ok(directives)
    }

    /// Parses `Description? Name ':' Type ('=' ConstValue)? Directives`.
    pub fn parse_input_value_definition(
        &mut self,
    ) -> Result<InputValueDefinition<'src>, GraphQLParseError> {
        let location = self.peek_location()?;
        let description = self.parse_description()?;
        let name = self.expect_ident()?;
        self.expect(&GraphQLTokenKind::Colon)?;
        let type_location = self.peek_location()?;
        let value_type = self.parse_type()?;
        let default_value = if self.peek_is(&GraphQLTokenKind::Equals) {
            self.advance()?;
            Some(self.parse_value(true)?)
        } else {
            None
        };
        let directives = self.parse_directives()?;

        Ok(InputValueDefinition {
            description,
            name,
            type_location,
            value_type,
            default_value,
            directives,
            location,
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses `'{' Selection* '}'`. Empty selection sets are accepted.
    fn parse_selection_set(&mut self) -> Result<Vec<Selection<'src>>, GraphQLParseError> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> Result<Vec<Selection<'src>>, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::CurlyBraceOpen)?;
        let mut selections = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::CurlyBraceClose) {
            let selection = if self.peek_is(&GraphQLTokenKind::Ellipsis) {
                self.parse_fragment_selection()?
            } else {
                Selection::Field(self.parse_field()?)
            };
            selections.push(selection);
        }
        self.advance()?;
        Ok(selections)
    }

    /// Parses `(Alias ':')? Name Arguments? Directives SelectionSet?`.
    fn parse_field(&mut self) -> Result<Field<'src>, GraphQLParseError> {
        let first = self.expect_ident()?;
        let location = first.location;
        let (alias, name) = if self.peek_is(&GraphQLTokenKind::Colon) {
            self.advance()?;
            (Some(first), self.expect_ident()?)
        } else {
            (None, first)
        };

        let arguments = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selection_set = if self.peek_is(&GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location,
        })
    }

    /// Parses a fragment spread (`...Name`) or an inline fragment
    /// (`... on Type { }`, `... @dir { }`, `... { }`).
    fn parse_fragment_selection(&mut self) -> Result<Selection<'src>, GraphQLParseError> {
        let location = self.peek_location()?;
        let is_spread = matches!(
            self.token_stream.peek_nth(1).map(|t| &t.kind),
            Some(GraphQLTokenKind::Name(name)) if name != "on",
        );
        self.expect(&GraphQLTokenKind::Ellipsis)?;

        if is_spread {
            let name = self.expect_ident()?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                location,
            }));
        }

        let type_condition = if self.peek_is_keyword("on") {
            self.advance()?;
            Some(self.expect_ident()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selections = self.parse_selection_set()?;

        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selections,
            location,
        }))
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    /// Parses a whole executable document: operations and fragment
    /// definitions until `Eof`.
    pub fn parse_executable_document(mut self) -> Result<Document<'src>, GraphQLParseError> {
        let mut document = Document::default();
        while !self.token_stream.is_at_end() {
            self.parse_definition(&mut document)?;
        }
        Ok(document)
    }

    fn parse_definition(&mut self, document: &mut Document<'src>) -> Result<(), GraphQLParseError> {
        let description = self.parse_description()?;
        let token = self.peek_token()?;
        let location = token.span.start_inclusive.to_location();

        let start = match &token.kind {
            GraphQLTokenKind::CurlyBraceOpen => DefinitionStart::Shorthand,
            GraphQLTokenKind::Name(keyword) => match OperationKind::from_keyword(keyword) {
                Some(kind) => DefinitionStart::Operation(kind),
                None if keyword == "fragment" => DefinitionStart::Fragment,
                None => DefinitionStart::Other,
            },
            _ => DefinitionStart::Other,
        };

        match start {
            DefinitionStart::Shorthand => {
                let selections = self.parse_selection_set()?;
                document.operations.push(Operation {
                    kind: OperationKind::Query,
                    description,
                    name: None,
                    variables: Vec::new(),
                    directives: Vec::new(),
                    selections,
                    location,
                });
            },
            DefinitionStart::Operation(kind) => {
                self.advance()?;
                let operation = self.parse_operation(kind, description, location)?;
                document.operations.push(operation);
            },
            DefinitionStart::Fragment => {
                self.advance()?;
                let fragment = self.parse_fragment_definition(description, location)?;
                document.fragments.push(fragment);
            },
            DefinitionStart::Other => {
                return Err(self.unexpected("\"fragment\""));
            },
        }
        Ok(())
    }

    /// Parses the rest of an operation after its keyword:
    /// `Name? VariableDefinitions? Directives SelectionSet`.
    fn parse_operation(
        &mut self,
        kind: OperationKind,
        description: Option<String>,
        location: Location,
    ) -> Result<Operation<'src>, GraphQLParseError> {
        let name = if self.peek_is_name() {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let variables = if self.peek_is(&GraphQLTokenKind::ParenOpen) {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives()?;
        let selections = self.parse_selection_set()?;

        Ok(Operation {
            kind,
            description,
            name,
            variables,
            directives,
            selections,
            location,
        })
    }

    /// Parses `'(' ('$' InputValueDefinition)* ')'`.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<InputValueDefinition<'src>>, GraphQLParseError> {
        self.expect(&GraphQLTokenKind::ParenOpen)?;
        let mut variables = Vec::new();
        while !self.peek_is(&GraphQLTokenKind::ParenClose) {
            let dollar = self.expect(&GraphQLTokenKind::Dollar)?;
            let mut variable = self.parse_input_value_definition()?;
            variable.location = dollar.span.start_inclusive.to_location();
            variables.push(variable);
        }
        self.advance()?;
        Ok(variables)
    }

    /// Parses the rest of a fragment definition after `fragment`:
    /// `Name 'on' Name Directives SelectionSet`.
    fn parse_fragment_definition(
        &mut self,
        description: Option<String>,
        location: Location,
    ) -> Result<FragmentDefinition<'src>, GraphQLParseError> {
        let name = self.expect_ident()?;
        self.expect_keyword("on")?;
        let type_condition = self.expect_ident()?;
        let directives = self.parse_directives()?;
        let selections = self.parse_selection_set()?;

        Ok(FragmentDefinition {
            description,
            name,
            type_condition,
            directives,
            selections,
            location,
        })
    }
}

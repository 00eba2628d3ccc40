use crate::{
    ast::Program,
    config::Limits,
    error::{ParseError, SyntaxError},
    grammar::{self, NonTerminal, Production},
    interpreter::lexer::{Lexer, Token, TokenKind, TokenSource},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses IMP source text into a [`Program`].
///
/// This is the entry point most callers want: it tokenizes `source`, runs
/// the predictive parser with the default [`Limits`] and annotates any
/// failure with the offending line.
///
/// # Errors
/// Returns a [`SyntaxError`] if the source contains an illegal character,
/// does not match the grammar, or nests too deeply.
///
/// # Example
/// ```
/// use imp::interpreter::parser::parse;
///
/// let program = parse("i = 1;\nwhile (i <= 3) { i = i + 1; }").unwrap();
/// assert_eq!(program.statements.iter().count(), 2);
///
/// let error = parse("i = 1;\nj = 2\nk = 3;").unwrap_err();
/// assert_eq!(error.line, 3);
/// assert_eq!(error.source_line, "k = 3;");
/// ```
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    Parser::new(source)?.parse()
}

/// A table-driven predictive parser.
///
/// Every nonterminal has one routine. The routine peeks at the next token,
/// asks the parse table which production applies and consumes that
/// production's right-hand side from left to right. One token of lookahead
/// always suffices, so the parser never backtracks.
pub struct Parser<'src, S> {
    tokens: S,
    source: &'src str,
    limits: Limits,
    depth:  usize,
}

impl<'src> Parser<'src, Lexer> {
    /// Tokenizes `source` and prepares a parser over it.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] if tokenization fails.
    pub fn new(source: &'src str) -> Result<Self, SyntaxError> {
        let tokens = Lexer::new(source).map_err(|e| SyntaxError::new(e, source))?;
        Ok(Self::from_tokens(tokens, source))
    }
}

impl<'src, S: TokenSource> Parser<'src, S> {
    /// Creates a parser over an existing token source.
    ///
    /// `source` is only used to quote the offending line in error messages.
    pub fn from_tokens(tokens: S, source: &'src str) -> Self {
        Self { tokens,
               source,
               limits: Limits::default(),
               depth: 0 }
    }

    /// Replaces the default nesting limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Parses the whole token stream as a program.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] at the first point where the tokens stop
    /// matching the grammar. No partial tree is produced.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        match self.parse_program() {
            Ok(program) => {
                tracing::debug!(statements = program.statements.iter().count(), "parsed program");
                Ok(program)
            },
            Err(error) => {
                tracing::debug!(%error, "parsing failed");
                Err(SyntaxError::new(error, self.source))
            },
        }
    }

    /// Returns the kind of the upcoming token.
    pub(in crate::interpreter::parser) fn lookahead(&self) -> TokenKind {
        TokenKind::of(self.tokens.peek())
    }

    /// Consumes the upcoming token, which must be of kind `expected`.
    pub(in crate::interpreter::parser) fn expect(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let line = self.tokens.current_line();
        match self.tokens.next() {
            Some(token) if token.kind() == expected => Ok(token),
            other => Err(ParseError::UnexpectedToken { expected,
                                                       found: describe(other.as_ref()),
                                                       line }),
        }
    }

    /// Requires the token stream to be exhausted.
    pub(in crate::interpreter::parser) fn expect_end(&self) -> ParseResult<()> {
        match self.tokens.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken { expected: TokenKind::Eof,
                                                             found:    describe(Some(token)),
                                                             line:     self.tokens
                                                                           .current_line(), }),
        }
    }

    /// Selects the production for a nonterminal that cannot be empty.
    pub(in crate::interpreter::parser) fn predict(&self,
                                                  nonterminal: NonTerminal)
                                                  -> ParseResult<Production> {
        grammar::lookup(nonterminal, self.lookahead()).ok_or_else(|| {
            ParseError::NoProduction { nonterminal,
                                       expected: grammar::expected_kinds(nonterminal),
                                       found: describe(self.tokens.peek()),
                                       line: self.tokens.current_line() }
        })
    }

    /// Selects the production for a nullable nonterminal. `None` stands for
    /// the ε production.
    pub(in crate::interpreter::parser) fn predict_nullable(&self,
                                                           nonterminal: NonTerminal)
                                                           -> Option<Production> {
        debug_assert!(nonterminal.is_nullable());
        grammar::lookup(nonterminal, self.lookahead())
    }

    /// Reports a table entry that the routine for `nonterminal` has no code
    /// for.
    pub(in crate::interpreter::parser) fn unhandled(&self,
                                                    nonterminal: NonTerminal,
                                                    production: Production)
                                                    -> ParseError {
        ParseError::UnhandledProduction { nonterminal,
                                          production,
                                          line: self.tokens.current_line() }
    }

    /// Runs `parse` one nesting level deeper, failing once the configured
    /// limit is reached.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= self.limits.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.limits.max_depth,
                                                    line:  self.tokens.current_line(), });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

/// Describes a token for error messages.
fn describe(token: Option<&Token>) -> String {
    match token {
        None => TokenKind::Eof.to_string(),
        Some(token @ (Token::Int(_) | Token::Bool(_) | Token::Id(_))) => {
            format!("{} '{token}'", token.kind())
        },
        Some(token) => token.to_string(),
    }
}

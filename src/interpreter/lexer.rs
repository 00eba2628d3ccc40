use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// Subtraction, multiplication, disjunction and the comparison operators other
/// than `<=` are recognized here but have no production in the grammar, so
/// the parser rejects them wherever they appear.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. There is no negative literal.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Identifier tokens such as `x` or `_foo87_`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Id(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Times,
    /// `/`
    #[token("/")]
    Divide,
    /// `=`
    #[token("=")]
    Assign,
    /// `!`
    #[token("!")]
    Negation,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    Neq,
    /// `<=`
    #[token("<=")]
    Leq,
    /// `>=`
    #[token(">=")]
    Geq,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LCurly,
    /// `}`
    #[token("}")]
    RCurly,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Int(_) => TokenKind::Int,
            Self::Bool(_) => TokenKind::Bool,
            Self::Id(_) => TokenKind::Id,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Times => TokenKind::Times,
            Self::Divide => TokenKind::Divide,
            Self::Assign => TokenKind::Assign,
            Self::Negation => TokenKind::Negation,
            Self::And => TokenKind::And,
            Self::Or => TokenKind::Or,
            Self::Eq => TokenKind::Eq,
            Self::Neq => TokenKind::Neq,
            Self::Leq => TokenKind::Leq,
            Self::Geq => TokenKind::Geq,
            Self::Lt => TokenKind::Lt,
            Self::Gt => TokenKind::Gt,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::LCurly => TokenKind::LCurly,
            Self::RCurly => TokenKind::RCurly,
            Self::Semicolon => TokenKind::Semicolon,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::While => TokenKind::While,
            Self::For => TokenKind::For,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Id(name) => write!(f, "{name}"),
            other => write!(f, "{}", other.kind()),
        }
    }
}

/// The lexical category of a token, without its payload.
///
/// Used as the lookahead column of the parse table. `Eof` is the kind of the
/// missing token past the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Int,
    Bool,
    Id,
    Plus,
    Minus,
    Times,
    Divide,
    Assign,
    Negation,
    And,
    Or,
    Eq,
    Neq,
    Leq,
    Geq,
    Lt,
    Gt,
    LParen,
    RParen,
    LCurly,
    RCurly,
    Semicolon,
    If,
    Else,
    While,
    For,
    Eof,
}

impl TokenKind {
    /// Returns the kind of an optional token, `Eof` for `None`.
    #[must_use]
    pub fn of(token: Option<&Token>) -> Self {
        token.map_or(Self::Eof, Token::kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Int => "integer literal",
            Self::Bool => "boolean literal",
            Self::Id => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Times => "'*'",
            Self::Divide => "'/'",
            Self::Assign => "'='",
            Self::Negation => "'!'",
            Self::And => "'&&'",
            Self::Or => "'||'",
            Self::Eq => "'=='",
            Self::Neq => "'!='",
            Self::Leq => "'<='",
            Self::Geq => "'>='",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LCurly => "'{'",
            Self::RCurly => "'}'",
            Self::Semicolon => "';'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::For => "'for'",
            Self::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// The token stream consumed by the parser.
///
/// A source hands out one token at a time with one token of lookahead. Past
/// the last token both `peek` and `next` keep returning `None`, which the
/// parser reads as end of input.
pub trait TokenSource {
    /// Returns the upcoming token without consuming it.
    fn peek(&self) -> Option<&Token>;

    /// Consumes and returns the upcoming token.
    fn next(&mut self) -> Option<Token>;

    /// Returns the line of the upcoming token, or the line of the last token
    /// once the stream is exhausted.
    fn current_line(&self) -> usize;
}

/// A fully tokenized source.
///
/// # Example
/// ```
/// use imp::interpreter::lexer::{Lexer, Token, TokenSource};
///
/// let mut lexer = Lexer::new("i = 7;\nwhile").unwrap();
/// assert_eq!(lexer.next(), Some(Token::Id("i".to_string())));
/// assert_eq!(lexer.peek(), Some(&Token::Assign));
/// lexer.next();
/// lexer.next();
/// lexer.next();
/// assert_eq!(lexer.current_line(), 2);
/// assert_eq!(lexer.next(), Some(Token::While));
/// assert_eq!(lexer.next(), None);
/// assert_eq!(lexer.peek(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens:    Vec<(Token, usize)>,
    cursor:    usize,
    last_line: usize,
}

impl Lexer {
    /// Tokenizes `source`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidToken` for a character that starts no token
    /// or an integer literal that does not fit in 64 bits.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Token::lexer(source);
        let mut tokens = Vec::new();
        let mut line = 1;
        let mut scanned = 0;

        while let Some(token) = lexer.next() {
            let start = lexer.span().start;
            line += source.as_bytes()[scanned..start].iter()
                                                     .filter(|&&byte| byte == b'\n')
                                                     .count();
            scanned = start;

            match token {
                Ok(tok) => tokens.push((tok, line)),
                Err(()) => {
                    return Err(ParseError::InvalidToken { text: lexer.slice().to_string(),
                                                          line });
                },
            }
        }

        tracing::debug!(tokens = tokens.len(), "tokenized source");

        Ok(Self::from_tokens(tokens))
    }

    /// Builds a source from already tokenized `(token, line)` pairs.
    #[must_use]
    pub fn from_tokens(tokens: Vec<(Token, usize)>) -> Self {
        let last_line = tokens.last().map_or(1, |(_, line)| *line);
        Self { tokens,
               cursor: 0,
               last_line }
    }

    /// Returns the number of tokens not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }
}

impl TokenSource for Lexer {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor).map(|(token, _)| token)
    }

    fn next(&mut self) -> Option<Token> {
        let (token, _) = self.tokens.get(self.cursor)?;
        self.cursor += 1;
        Some(token.clone())
    }

    fn current_line(&self) -> usize {
        self.tokens.get(self.cursor).map_or(self.last_line, |(_, line)| *line)
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the literal is out of range, which makes it a lexical error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

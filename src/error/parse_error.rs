use std::fmt;

use crate::{
    error::ErrorKind,
    grammar::{NonTerminal, Production},
    interpreter::lexer::TokenKind,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all structural errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found text that starts no token.
    InvalidToken {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific terminal was required but another token was found.
    UnexpectedToken {
        /// The terminal the grammar requires at this position.
        expected: TokenKind,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The parse table has no production for the nonterminal and lookahead.
    NoProduction {
        /// The nonterminal being parsed.
        nonterminal: NonTerminal,
        /// The token kinds that would have been accepted.
        expected:    Vec<TokenKind>,
        /// Description of the token actually found.
        found:       String,
        /// The source line where the error occurred.
        line:        usize,
    },
    /// The parse table selected a production that the routine for the
    /// nonterminal cannot build.
    UnhandledProduction {
        /// The nonterminal being parsed.
        nonterminal: NonTerminal,
        /// The production returned by the table.
        production:  Production,
        /// The source line where the error occurred.
        line:        usize,
    },
    /// The input nests deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line where the error occurred.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::NoProduction { line, .. }
            | Self::UnhandledProduction { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken { .. } | Self::UnexpectedToken { .. } | Self::NoProduction { .. } => {
                ErrorKind::Syntax
            },
            Self::UnhandledProduction { .. } => ErrorKind::InternalInconsistency,
            Self::NestingTooDeep { .. } => ErrorKind::ResourceExhausted,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { text, line } => {
                write!(f, "Error on line {line}: Illegal character sequence '{text}'.")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, but found {found}.")
            },
            Self::NoProduction { nonterminal,
                                 expected,
                                 found,
                                 line, } => {
                let expected = expected.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f,
                       "Error on line {line}: Cannot start {nonterminal} with {found}; expected one of {expected}.")
            },
            Self::UnhandledProduction { nonterminal,
                                        production,
                                        line, } => write!(f,
                                                          "Error on line {line}: Internal error: the parse table selected `{production}` while parsing {nonterminal}."),
            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Input nests deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// A parse failure annotated with the source line it happened on.
///
/// Parsing stops at the first error, so a `SyntaxError` always describes the
/// first point where the input diverged from the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// The underlying structural error.
    pub error:       ParseError,
    /// The 1-based line number of the failure.
    pub line:        usize,
    /// The text of that line, without its line break.
    pub source_line: String,
}

impl SyntaxError {
    /// Annotates `error` with the line of `source` it refers to.
    #[must_use]
    pub fn new(error: ParseError, source: &str) -> Self {
        let line = error.line();
        let source_line = source.lines()
                                .nth(line.saturating_sub(1))
                                .unwrap_or_default()
                                .to_string();
        Self { error,
               line,
               source_line }
    }

    /// Classifies the underlying error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}\nParsing failure on line {}:\n{}",
               self.error, self.line, self.source_line)
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

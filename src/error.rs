use std::fmt;

/// Parsing errors.
///
/// Defines the structural errors raised while tokenizing and parsing source
/// code, and the [`SyntaxError`] wrapper that annotates them with the
/// offending source line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while running a parsed
/// program: unbound variables, arithmetic failures and runaway nesting.
pub mod runtime_error;

pub use parse_error::{ParseError, SyntaxError};
pub use runtime_error::RuntimeError;

/// The category an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not match the grammar.
    Syntax,
    /// A program read a variable it never assigned.
    UnboundVariable,
    /// Division by zero or integer overflow.
    Arithmetic,
    /// The grammar tables and the code that consumes them disagree.
    InternalInconsistency,
    /// Parsing or evaluation nested deeper than the configured limit.
    ResourceExhausted,
}

/// Any failure from parsing or running a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parsing failed.
    Syntax(SyntaxError),
    /// Running the parsed program failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

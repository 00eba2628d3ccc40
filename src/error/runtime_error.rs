use std::fmt;

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while running a program.
pub enum RuntimeError {
    /// Read a variable that was never assigned.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// The right operand of `/` evaluated to zero.
    DivisionByZero {
        /// The left operand of the division.
        dividend: i64,
    },
    /// An intermediate result does not fit in 64 bits.
    Overflow,
    /// Evaluation nests deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            Self::DivisionByZero { .. } | Self::Overflow => ErrorKind::Arithmetic,
            Self::NestingTooDeep { .. } => ErrorKind::ResourceExhausted,
        }
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Encountered unknown variable: '{name}'."),
            Self::DivisionByZero { dividend } => write!(f, "Division by zero: {dividend} / 0."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::NestingTooDeep { limit } => {
                write!(f, "Evaluation nests deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}

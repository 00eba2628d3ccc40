/// Parser state, token helpers and the public entry points.
///
/// Holds the token source, the nesting guard and the table lookups shared by
/// every parsing routine.
pub mod core;

/// Arithmetic expression parsing.
///
/// Parses `ArithExp` and its `ArithTail` continuation.
pub mod arith;

/// Boolean expression parsing.
///
/// Parses `BoolExp` and its `BoolTail` continuation, including `<=`
/// comparisons between arithmetic expressions.
pub mod boolean;

/// Statement parsing.
///
/// Parses programs, statement sequences, single statements and blocks.
pub mod statement;

pub use self::core::{ParseResult, Parser, parse};

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, its run entry point, the nesting guard and
/// variable lookup.
pub mod core;

/// Arithmetic expression evaluation.
///
/// Evaluates `ArithExp` leaves and folds `ArithTail` continuations with
/// checked addition and truncating division.
pub mod arith;

/// Boolean expression evaluation.
///
/// Evaluates literals, `<=` comparisons and negations, and folds `BoolTail`
/// continuations with short-circuiting conjunction.
pub mod boolean;

/// Statement execution.
///
/// Runs assignments, conditionals, loops, blocks and statement sequences
/// against the shared environment.
pub mod statement;

pub use self::core::{EvalResult, Interpreter};

use crate::{
    ast::Program,
    config::Limits,
    error::RuntimeError,
    interpreter::environment::Environment,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A tree-walking interpreter for parsed programs.
///
/// The interpreter owns the environment the program runs against. Separate
/// interpreters share nothing, and the same interpreter can run any number of
/// programs one after another; every run starts from an empty environment.
///
/// # Example
/// ```
/// use imp::interpreter::{evaluator::Interpreter, parser::parse};
///
/// let program = parse("x = 4; y = 10; product = 0; i = 0;
///                      while (i + 1 <= x) { product = product + y; i = i + 1; }").unwrap();
///
/// let mut interpreter = Interpreter::new();
/// let env = interpreter.run(&program).unwrap();
/// assert_eq!(env.get("product"), Some(40));
/// assert_eq!(env.get("i"), Some(4));
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(in crate::interpreter::evaluator) env: Environment,
    limits: Limits,
    depth:  usize,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with the given nesting limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { limits,
               ..Self::default() }
    }

    /// Runs `program` from an empty environment.
    ///
    /// Statements execute in order and stop at the first error. A program
    /// that loops forever makes this call run forever.
    ///
    /// # Errors
    /// - `UnboundVariable` if an expression reads a variable that has not been
    ///   assigned yet.
    /// - `DivisionByZero` or `Overflow` for failed arithmetic.
    /// - `NestingTooDeep` if evaluation exceeds the depth limit.
    ///
    /// # Returns
    /// The final environment.
    pub fn run(&mut self, program: &Program) -> EvalResult<&Environment> {
        self.env.clear();
        self.depth = 0;
        tracing::debug!("running program");

        self.exec_statements(&program.statements)?;

        tracing::debug!(bindings = self.env.len(), "program complete");
        Ok(&self.env)
    }

    /// Returns the environment left by the most recent run.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Reads a variable.
    pub(in crate::interpreter::evaluator) fn lookup(&self, name: &str) -> EvalResult<i64> {
        self.env
            .get(name)
            .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string() })
    }

    /// Runs `eval` one nesting level deeper, failing once the configured
    /// limit is reached.
    pub(in crate::interpreter::evaluator) fn nested<T>(&mut self,
                                                       eval: impl FnOnce(&mut Self) -> EvalResult<T>)
                                                       -> EvalResult<T> {
        if self.depth >= self.limits.max_depth {
            return Err(RuntimeError::NestingTooDeep { limit: self.limits.max_depth });
        }
        self.depth += 1;
        let result = eval(self);
        self.depth -= 1;
        result
    }
}

use crate::{
    ast::{ArithExp, ArithTail},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates an arithmetic expression.
    ///
    /// The leaf is evaluated first (a literal, or a variable read), then the
    /// tail is folded into it.
    ///
    /// # Errors
    /// Returns `UnboundVariable` for a variable that has no binding, or any
    /// error from folding the tail.
    pub fn eval_arith_exp(&mut self, exp: &ArithExp) -> EvalResult<i64> {
        self.nested(|interpreter| {
                let (value, tail) = match exp {
                    ArithExp::IntTerm { value, tail } => (value.0, tail),
                    ArithExp::IdTerm { value, tail } => (interpreter.lookup(value.name())?, tail),
                };
                interpreter.fold_arith_tail(value, tail)
            })
    }

    /// Folds an arithmetic continuation into `acc` from left to right.
    ///
    /// Each `Sum` adds its operand to the running value and each `Div`
    /// divides the running value by its operand, truncating toward zero.
    fn fold_arith_tail(&mut self, mut acc: i64, mut tail: &ArithTail) -> EvalResult<i64> {
        loop {
            match tail {
                ArithTail::Empty => return Ok(acc),
                ArithTail::Sum { next, tail: rest } => {
                    let rhs = self.eval_arith_exp(next)?;
                    acc = acc.checked_add(rhs).ok_or(RuntimeError::Overflow)?;
                    tail = rest;
                },
                ArithTail::Div { next, tail: rest } => {
                    let rhs = self.eval_arith_exp(next)?;
                    acc = truncating_div(acc, rhs)?;
                    tail = rest;
                },
            }
        }
    }
}

/// Divides `lhs` by `rhs`, rounding the quotient toward zero.
///
/// # Errors
/// - `DivisionByZero` if `rhs` is zero.
/// - `Overflow` for `i64::MIN / -1`.
///
/// # Example
/// ```
/// use imp::interpreter::evaluator::arith::truncating_div;
///
/// assert_eq!(truncating_div(21, 4).unwrap(), 5);
/// assert_eq!(truncating_div(-7, 2).unwrap(), -3);
/// assert!(truncating_div(1, 0).is_err());
/// ```
pub fn truncating_div(lhs: i64, rhs: i64) -> EvalResult<i64> {
    if rhs == 0 {
        return Err(RuntimeError::DivisionByZero { dividend: lhs });
    }
    // Integer division in Rust already truncates toward zero.
    lhs.checked_div(rhs).ok_or(RuntimeError::Overflow)
}

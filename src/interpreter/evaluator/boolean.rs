use crate::{
    ast::{BoolExp, BoolTail},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Evaluates a boolean expression.
    ///
    /// A literal evaluates to itself, a comparison evaluates both arithmetic
    /// operands and tests `lhs <= rhs`, and a negation inverts its operand.
    /// The result is then folded through the tail.
    ///
    /// # Errors
    /// Propagates errors from the arithmetic operands of comparisons.
    pub fn eval_bool_exp(&mut self, exp: &BoolExp) -> EvalResult<bool> {
        self.nested(|interpreter| {
                let (value, tail) = match exp {
                    BoolExp::BoolTerm { value, tail } => (value.0, tail),
                    BoolExp::LeqTerm { lhs, rhs, tail } => {
                        let lhs = interpreter.eval_arith_exp(lhs)?;
                        let rhs = interpreter.eval_arith_exp(rhs)?;
                        (lhs <= rhs, tail)
                    },
                    BoolExp::NegTerm { exp, tail } => (!interpreter.eval_bool_exp(exp)?, tail),
                };
                interpreter.fold_bool_tail(value, tail)
            })
    }

    /// Folds a conjunction continuation into `acc`.
    ///
    /// Conjunction short-circuits: once the running value is false, the
    /// remaining operands are never evaluated, so they cannot fail.
    fn fold_bool_tail(&mut self, mut acc: bool, mut tail: &BoolTail) -> EvalResult<bool> {
        while let BoolTail::And { next, tail: rest } = tail {
            if acc {
                acc = self.eval_bool_exp(next)?;
            }
            tail = rest;
        }
        Ok(acc)
    }
}

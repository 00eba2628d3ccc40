use crate::{
    ast::{Block, Statement, Statements},
    interpreter::evaluator::core::{EvalResult, Interpreter},
};

impl Interpreter {
    /// Executes a single statement.
    ///
    /// - `Assign` evaluates its expression and stores it, overwriting any
    ///   earlier value.
    /// - `If` evaluates its condition once and runs exactly one block.
    /// - `While` re-evaluates its condition before every iteration. There is
    ///   no iteration bound.
    ///
    /// # Errors
    /// Propagates the first error raised by an expression or nested statement.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        self.nested(|interpreter| match statement {
                        Statement::Assign { id, exp } => {
                            let value = interpreter.eval_arith_exp(exp)?;
                            tracing::trace!(name = id.name(), value, "assign");
                            interpreter.env.assign(id.name(), value);
                            Ok(())
                        },
                        Statement::If { cond,
                                        then_block,
                                        else_block, } => {
                            if interpreter.eval_bool_exp(cond)? {
                                interpreter.exec_block(then_block)
                            } else {
                                interpreter.exec_block(else_block)
                            }
                        },
                        Statement::While { cond, body } => {
                            while interpreter.eval_bool_exp(cond)? {
                                interpreter.exec_block(body)?;
                            }
                            Ok(())
                        },
                    })
    }

    /// Executes a statement sequence in order. The empty sequence does
    /// nothing.
    pub fn exec_statements(&mut self, statements: &Statements) -> EvalResult<()> {
        for statement in statements {
            self.exec_statement(statement)?;
        }
        Ok(())
    }

    /// Executes the statements of a block in the current environment.
    pub fn exec_block(&mut self, block: &Block) -> EvalResult<()> {
        self.exec_statements(&block.statements)
    }
}

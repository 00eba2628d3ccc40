use crate::{
    ast::{Block, Program, Statement, Statements},
    grammar::{NonTerminal, Production},
    interpreter::{
        lexer::{TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<'_, S> {
    /// Parses a full program.
    ///
    /// Grammar: `Program ::= Statements EOF`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if anything other than a statement remains
    /// once the statement sequence ends.
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<Program> {
        let statements = self.parse_statements()?;
        self.expect_end()?;
        Ok(Program { statements })
    }

    /// Parses a possibly empty statement sequence.
    ///
    /// Grammar: `Statements ::= Statement Statements | ε`
    ///
    /// The right recursion of the grammar is unrolled into a loop: the table
    /// is consulted before every statement, and the first lookahead without an
    /// entry ends the sequence. Sequences therefore cost no nesting depth.
    pub(in crate::interpreter::parser) fn parse_statements(&mut self) -> ParseResult<Statements> {
        let mut statements = Vec::new();

        loop {
            match self.predict_nullable(NonTerminal::Statements) {
                None => break,
                Some(Production::StatementsSequence) => statements.push(self.parse_statement()?),
                Some(other) => return Err(self.unhandled(NonTerminal::Statements, other)),
            }
        }

        Ok(statements.into_iter().collect())
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    /// Statement ::= Id "=" ArithExp ";"
    ///             | "if" "(" BoolExp ")" Block "else" Block
    ///             | "while" "(" BoolExp ")" Block
    /// ```
    ///
    /// The `else` branch is mandatory; write `else {}` for none.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.nested(|parser| match parser.predict(NonTerminal::Statement)? {
                        Production::StatementAssign => {
                            let id = parser.parse_id()?;
                            parser.expect(TokenKind::Assign)?;
                            let exp = parser.parse_arith_exp()?;
                            parser.expect(TokenKind::Semicolon)?;
                            Ok(Statement::Assign { id, exp })
                        },
                        Production::StatementIf => {
                            parser.expect(TokenKind::If)?;
                            parser.expect(TokenKind::LParen)?;
                            let cond = parser.parse_bool_exp()?;
                            parser.expect(TokenKind::RParen)?;
                            let then_block = parser.parse_block()?;
                            parser.expect(TokenKind::Else)?;
                            let else_block = parser.parse_block()?;
                            Ok(Statement::If { cond,
                                               then_block,
                                               else_block })
                        },
                        Production::StatementWhile => {
                            parser.expect(TokenKind::While)?;
                            parser.expect(TokenKind::LParen)?;
                            let cond = parser.parse_bool_exp()?;
                            parser.expect(TokenKind::RParen)?;
                            let body = parser.parse_block()?;
                            Ok(Statement::While { cond, body })
                        },
                        other => Err(parser.unhandled(NonTerminal::Statement, other)),
                    })
    }

    /// Parses a brace-delimited block.
    ///
    /// Grammar: `Block ::= "{" Statements "}"`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect(TokenKind::LCurly)?;
        let statements = self.parse_statements()?;
        self.expect(TokenKind::RCurly)?;
        Ok(Block { statements })
    }
}

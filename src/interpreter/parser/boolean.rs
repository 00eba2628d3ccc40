use crate::{
    ast::{Bool, BoolExp, BoolTail},
    grammar::{NonTerminal, Production},
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<'_, S> {
    /// Parses a boolean literal.
    pub(in crate::interpreter::parser) fn parse_bool(&mut self) -> ParseResult<Bool> {
        match self.expect(TokenKind::Bool)? {
            Token::Bool(value) => Ok(Bool(value)),
            _ => unreachable!("expect returned a token of another kind"),
        }
    }

    /// Parses a boolean expression.
    ///
    /// Grammar:
    /// ```text
    /// BoolExp ::= Bool BoolTail
    ///           | ArithExp "<=" ArithExp BoolTail
    ///           | "!" BoolExp BoolTail
    /// ```
    ///
    /// An integer or identifier in first position can only begin a
    /// comparison, which is what lets a single token of lookahead tell a
    /// comparison from a boolean literal.
    ///
    /// # Errors
    /// - `NoProduction` if the next token cannot start a boolean expression.
    /// - `UnexpectedToken` if a comparison is missing its `<=`.
    pub(in crate::interpreter::parser) fn parse_bool_exp(&mut self) -> ParseResult<BoolExp> {
        self.nested(|parser| match parser.predict(NonTerminal::BoolExp)? {
                        Production::BoolExpBool => {
                            let value = parser.parse_bool()?;
                            let tail = parser.parse_bool_tail()?;
                            Ok(BoolExp::BoolTerm { value, tail })
                        },
                        Production::BoolExpLeq => {
                            let lhs = parser.parse_arith_exp()?;
                            parser.expect(TokenKind::Leq)?;
                            let rhs = parser.parse_arith_exp()?;
                            let tail = parser.parse_bool_tail()?;
                            Ok(BoolExp::LeqTerm { lhs, rhs, tail })
                        },
                        Production::BoolExpNegation => {
                            parser.expect(TokenKind::Negation)?;
                            let exp = parser.parse_bool_exp()?;
                            let tail = parser.parse_bool_tail()?;
                            Ok(BoolExp::NegTerm { exp: Box::new(exp),
                                                  tail })
                        },
                        other => Err(parser.unhandled(NonTerminal::BoolExp, other)),
                    })
    }

    /// Parses the continuation of a boolean expression.
    ///
    /// Grammar: `BoolTail ::= "&&" BoolExp BoolTail | ε`
    pub(in crate::interpreter::parser) fn parse_bool_tail(&mut self) -> ParseResult<BoolTail> {
        match self.predict_nullable(NonTerminal::BoolTail) {
            None => Ok(BoolTail::Empty),
            Some(Production::BoolTailAnd) => {
                self.expect(TokenKind::And)?;
                let next = self.parse_bool_exp()?;
                let tail = self.parse_bool_tail()?;
                Ok(BoolTail::And { next: Box::new(next),
                                   tail: Box::new(tail), })
            },
            Some(other) => Err(self.unhandled(NonTerminal::BoolTail, other)),
        }
    }
}

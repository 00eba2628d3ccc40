use crate::{
    ast::{ArithExp, ArithTail, Id, Int},
    grammar::{NonTerminal, Production},
    interpreter::{
        lexer::{Token, TokenKind, TokenSource},
        parser::core::{ParseResult, Parser},
    },
};

impl<S: TokenSource> Parser<'_, S> {
    /// Parses an integer literal.
    pub(in crate::interpreter::parser) fn parse_int(&mut self) -> ParseResult<Int> {
        match self.expect(TokenKind::Int)? {
            Token::Int(value) => Ok(Int(value)),
            _ => unreachable!("expect returned a token of another kind"),
        }
    }

    /// Parses an identifier.
    pub(in crate::interpreter::parser) fn parse_id(&mut self) -> ParseResult<Id> {
        match self.expect(TokenKind::Id)? {
            Token::Id(name) => Ok(Id(name)),
            _ => unreachable!("expect returned a token of another kind"),
        }
    }

    /// Parses an arithmetic expression.
    ///
    /// Grammar: `ArithExp ::= Int ArithTail | Id ArithTail`
    ///
    /// # Errors
    /// - `NoProduction` if the next token is neither an integer nor an
    ///   identifier.
    /// - `NestingTooDeep` if the operator chain exceeds the depth limit.
    pub(in crate::interpreter::parser) fn parse_arith_exp(&mut self) -> ParseResult<ArithExp> {
        self.nested(|parser| match parser.predict(NonTerminal::ArithExp)? {
                        Production::ArithExpInt => {
                            let value = parser.parse_int()?;
                            let tail = parser.parse_arith_tail()?;
                            Ok(ArithExp::IntTerm { value, tail })
                        },
                        Production::ArithExpId => {
                            let value = parser.parse_id()?;
                            let tail = parser.parse_arith_tail()?;
                            Ok(ArithExp::IdTerm { value, tail })
                        },
                        other => Err(parser.unhandled(NonTerminal::ArithExp, other)),
                    })
    }

    /// Parses the continuation of an arithmetic expression.
    ///
    /// Grammar: `ArithTail ::= "+" ArithExp ArithTail | "/" ArithExp ArithTail | ε`
    ///
    /// Any lookahead without a table entry ends the expression.
    pub(in crate::interpreter::parser) fn parse_arith_tail(&mut self) -> ParseResult<ArithTail> {
        match self.predict_nullable(NonTerminal::ArithTail) {
            None => Ok(ArithTail::Empty),
            Some(Production::ArithTailSum) => {
                self.expect(TokenKind::Plus)?;
                let next = self.parse_arith_exp()?;
                let tail = self.parse_arith_tail()?;
                Ok(ArithTail::Sum { next: Box::new(next),
                                    tail: Box::new(tail), })
            },
            Some(Production::ArithTailDiv) => {
                self.expect(TokenKind::Divide)?;
                let next = self.parse_arith_exp()?;
                let tail = self.parse_arith_tail()?;
                Ok(ArithTail::Div { next: Box::new(next),
                                    tail: Box::new(tail), })
            },
            Some(other) => Err(self.unhandled(NonTerminal::ArithTail, other)),
        }
    }
}

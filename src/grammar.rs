use std::fmt;

use crate::interpreter::lexer::TokenKind;

/// The nonterminal symbols of the IMP grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    ArithExp,
    ArithTail,
    BoolExp,
    BoolTail,
    Statements,
    Statement,
    Block,
    Program,
}

impl NonTerminal {
    /// Returns `true` if the nonterminal can derive the empty string.
    ///
    /// A nullable nonterminal whose lookahead has no table entry takes its ε
    /// production instead of failing.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::ArithTail | Self::BoolTail | Self::Statements)
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One label per right-hand side alternative that the parse table can select.
///
/// Nonterminals with a single production (`Block`, `Program`) and the ε
/// alternatives are not listed: they never need a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    ArithExpInt,
    ArithExpId,
    ArithTailSum,
    ArithTailDiv,
    BoolExpBool,
    BoolExpLeq,
    BoolExpNegation,
    BoolTailAnd,
    StatementsSequence,
    StatementAssign,
    StatementIf,
    StatementWhile,
}

impl Production {
    /// Every production, in declaration order.
    pub const ALL: [Self; 12] = [Self::ArithExpInt,
                                 Self::ArithExpId,
                                 Self::ArithTailSum,
                                 Self::ArithTailDiv,
                                 Self::BoolExpBool,
                                 Self::BoolExpLeq,
                                 Self::BoolExpNegation,
                                 Self::BoolTailAnd,
                                 Self::StatementsSequence,
                                 Self::StatementAssign,
                                 Self::StatementIf,
                                 Self::StatementWhile];

    /// Returns the left-hand side of the production.
    #[must_use]
    pub const fn nonterminal(self) -> NonTerminal {
        match self {
            Self::ArithExpInt | Self::ArithExpId => NonTerminal::ArithExp,
            Self::ArithTailSum | Self::ArithTailDiv => NonTerminal::ArithTail,
            Self::BoolExpBool | Self::BoolExpLeq | Self::BoolExpNegation => NonTerminal::BoolExp,
            Self::BoolTailAnd => NonTerminal::BoolTail,
            Self::StatementsSequence => NonTerminal::Statements,
            Self::StatementAssign | Self::StatementIf | Self::StatementWhile => {
                NonTerminal::Statement
            },
        }
    }

    /// Returns the right-hand side of the production in grammar notation.
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::ArithExpInt => "Int ArithTail",
            Self::ArithExpId => "Id ArithTail",
            Self::ArithTailSum => "\"+\" ArithExp ArithTail",
            Self::ArithTailDiv => "\"/\" ArithExp ArithTail",
            Self::BoolExpBool => "Bool BoolTail",
            Self::BoolExpLeq => "ArithExp \"<=\" ArithExp BoolTail",
            Self::BoolExpNegation => "\"!\" BoolExp BoolTail",
            Self::BoolTailAnd => "\"&&\" BoolExp BoolTail",
            Self::StatementsSequence => "Statement Statements",
            Self::StatementAssign => "Id \"=\" ArithExp \";\"",
            Self::StatementIf => "\"if\" \"(\" BoolExp \")\" Block \"else\" Block",
            Self::StatementWhile => "\"while\" \"(\" BoolExp \")\" Block",
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::= {}", self.nonterminal(), self.rule())
    }
}

/// The predictive parse table.
///
/// Each row maps a nonterminal and a lookahead token kind to the production
/// that must be used. The grammar is LL(1), so no `(nonterminal, kind)` pair
/// occurs twice.
pub static PARSE_TABLE: &[(NonTerminal, TokenKind, Production)] =
    &[(NonTerminal::ArithExp, TokenKind::Int, Production::ArithExpInt),
      (NonTerminal::ArithExp, TokenKind::Id, Production::ArithExpId),
      (NonTerminal::ArithTail, TokenKind::Plus, Production::ArithTailSum),
      (NonTerminal::ArithTail, TokenKind::Divide, Production::ArithTailDiv),
      (NonTerminal::BoolExp, TokenKind::Bool, Production::BoolExpBool),
      // Anything that starts an ArithExp starts a comparison.
      (NonTerminal::BoolExp, TokenKind::Int, Production::BoolExpLeq),
      (NonTerminal::BoolExp, TokenKind::Id, Production::BoolExpLeq),
      (NonTerminal::BoolExp, TokenKind::Negation, Production::BoolExpNegation),
      (NonTerminal::BoolTail, TokenKind::And, Production::BoolTailAnd),
      // Anything that starts a Statement starts a nonempty sequence.
      (NonTerminal::Statements, TokenKind::Id, Production::StatementsSequence),
      (NonTerminal::Statements, TokenKind::If, Production::StatementsSequence),
      (NonTerminal::Statements, TokenKind::While, Production::StatementsSequence),
      (NonTerminal::Statement, TokenKind::Id, Production::StatementAssign),
      (NonTerminal::Statement, TokenKind::If, Production::StatementIf),
      (NonTerminal::Statement, TokenKind::While, Production::StatementWhile)];

/// Looks up the production for `nonterminal` when the next token is of kind
/// `lookahead`.
///
/// # Example
/// ```
/// use imp::{
///     grammar::{NonTerminal, Production, lookup},
///     interpreter::lexer::TokenKind,
/// };
///
/// assert_eq!(lookup(NonTerminal::BoolExp, TokenKind::Id), Some(Production::BoolExpLeq));
/// assert_eq!(lookup(NonTerminal::ArithTail, TokenKind::Semicolon), None);
/// ```
#[must_use]
pub fn lookup(nonterminal: NonTerminal, lookahead: TokenKind) -> Option<Production> {
    PARSE_TABLE.iter()
               .find(|(nt, kind, _)| *nt == nonterminal && *kind == lookahead)
               .map(|(_, _, production)| *production)
}

/// Returns the token kinds that have a table entry for `nonterminal`.
///
/// This is the set of tokens the parser would have accepted where a
/// production of `nonterminal` was required.
#[must_use]
pub fn expected_kinds(nonterminal: NonTerminal) -> Vec<TokenKind> {
    PARSE_TABLE.iter()
               .filter(|(nt, _, _)| *nt == nonterminal)
               .map(|(_, kind, _)| *kind)
               .collect()
}

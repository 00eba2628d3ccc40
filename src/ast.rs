/// An integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int(pub i64);

/// A boolean literal, `true` or `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

/// A variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id(pub String);

impl Id {
    /// Returns the identifier text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// An arithmetic expression: a leaf followed by an operator continuation.
///
/// Grammar: `ArithExp ::= (Int | Id) ArithTail`
///
/// The leaf is evaluated first and the tail is then folded into it from left
/// to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithExp {
    /// An integer literal followed by its continuation.
    IntTerm {
        /// The literal leaf.
        value: Int,
        /// The operators that follow the leaf.
        tail:  ArithTail,
    },
    /// A variable read followed by its continuation.
    IdTerm {
        /// The variable leaf.
        value: Id,
        /// The operators that follow the leaf.
        tail:  ArithTail,
    },
}

/// The continuation of an arithmetic expression.
///
/// Grammar: `ArithTail ::= "+" ArithExp ArithTail | "/" ArithExp ArithTail | ε`
///
/// This right-recursive shape stands in for the left-recursive
/// `ArithExp ::= ArithExp "+" ArithExp` so that the grammar stays LL(1).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArithTail {
    /// No further operator.
    #[default]
    Empty,
    /// `+ next tail`
    Sum {
        /// The right operand.
        next: Box<ArithExp>,
        /// The remaining continuation.
        tail: Box<ArithTail>,
    },
    /// `/ next tail`
    Div {
        /// The right operand.
        next: Box<ArithExp>,
        /// The remaining continuation.
        tail: Box<ArithTail>,
    },
}

/// A boolean expression: a leaf followed by a conjunction continuation.
///
/// Grammar:
/// ```text
/// BoolExp ::= Bool BoolTail
///           | ArithExp "<=" ArithExp BoolTail
///           | "!" BoolExp BoolTail
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoolExp {
    /// A boolean literal.
    BoolTerm {
        /// The literal leaf.
        value: Bool,
        /// The conjunctions that follow the leaf.
        tail:  BoolTail,
    },
    /// An `lhs <= rhs` comparison.
    LeqTerm {
        /// Left-hand side of the comparison.
        lhs:  ArithExp,
        /// Right-hand side of the comparison.
        rhs:  ArithExp,
        /// The conjunctions that follow the comparison.
        tail: BoolTail,
    },
    /// A negated boolean expression.
    NegTerm {
        /// The negated operand.
        exp:  Box<BoolExp>,
        /// The conjunctions that follow the negation.
        tail: BoolTail,
    },
}

/// The continuation of a boolean expression.
///
/// Grammar: `BoolTail ::= "&&" BoolExp BoolTail | ε`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BoolTail {
    /// No further conjunction.
    #[default]
    Empty,
    /// `&& next tail`
    And {
        /// The right operand, skipped when the left side is already false.
        next: Box<BoolExp>,
        /// The remaining continuation.
        tail: Box<BoolTail>,
    },
}

/// A single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `id = exp;`
    Assign {
        /// The variable being written.
        id:  Id,
        /// The value to store.
        exp: ArithExp,
    },
    /// `if (cond) { ... } else { ... }`
    If {
        /// The condition selecting a branch.
        cond:       BoolExp,
        /// Runs when the condition holds.
        then_block: Block,
        /// Runs when the condition does not hold.
        else_block: Block,
    },
    /// `while (cond) { ... }`
    While {
        /// Re-evaluated before every iteration.
        cond: BoolExp,
        /// The loop body.
        body: Block,
    },
}

/// A brace-delimited statement sequence. Blocks do not open a new scope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// The statements inside the braces, possibly none.
    pub statements: Statements,
}

/// A singly linked sequence of statements.
///
/// Grammar: `Statements ::= Statement Statements | ε`
///
/// Sequences can be arbitrarily long, so they are built, walked and dropped
/// without recursion.
///
/// # Example
/// ```
/// use imp::ast::{ArithExp, ArithTail, Id, Int, Statement, Statements};
///
/// let assign = |name: &str, n| Statement::Assign { id:  Id::from(name),
///                                                  exp: ArithExp::IntTerm { value: Int(n),
///                                                                           tail:
///                                                                               ArithTail::Empty, }, };
///
/// let statements: Statements = [assign("a", 1), assign("b", 2)].into_iter().collect();
/// assert_eq!(statements.iter().count(), 2);
/// assert!(Statements::Empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Statements {
    /// The empty sequence.
    #[default]
    Empty,
    /// A head statement followed by the rest of the sequence.
    Cons {
        /// The first statement.
        head: Box<Statement>,
        /// The statements after `head`.
        tail: Box<Statements>,
    },
}

impl Statements {
    /// Returns `true` for the empty sequence.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Iterates over the statements in source order.
    #[must_use]
    pub const fn iter(&self) -> StatementsIter<'_> {
        StatementsIter { current: self }
    }
}

impl FromIterator<Statement> for Statements {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        let statements: Vec<Statement> = iter.into_iter().collect();
        statements.into_iter()
                  .rev()
                  .fold(Self::Empty, |tail, head| Self::Cons { head: Box::new(head),
                                                               tail: Box::new(tail), })
    }
}

impl Drop for Statements {
    fn drop(&mut self) {
        let mut current = match self {
            Self::Empty => return,
            Self::Cons { tail, .. } => std::mem::take(tail.as_mut()),
        };
        while let Self::Cons { tail, .. } = &mut current {
            let rest = std::mem::take(tail.as_mut());
            current = rest;
        }
    }
}

/// Borrowing iterator over a [`Statements`] sequence.
pub struct StatementsIter<'a> {
    current: &'a Statements,
}

impl<'a> Iterator for StatementsIter<'a> {
    type Item = &'a Statement;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            Statements::Empty => None,
            Statements::Cons { head, tail } => {
                self.current = tail;
                Some(head)
            },
        }
    }
}

impl<'a> IntoIterator for &'a Statements {
    type IntoIter = StatementsIter<'a>;
    type Item = &'a Statement;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A whole program.
///
/// Grammar: `Program ::= Statements EOF`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statement sequence.
    pub statements: Statements,
}

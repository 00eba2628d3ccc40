//! # imp
//!
//! imp is an interpreter for IMP, a small imperative teaching language with
//! integers, booleans, assignment, `if`/`else` and `while`. Source text is
//! tokenized, parsed by a table-driven LL(1) parser into an immutable AST,
//! and run by a tree-walking interpreter.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    config::Limits,
    error::Error,
    interpreter::{environment::Environment, evaluator::Interpreter, parser::Parser},
};

/// Defines the structure of parsed programs.
///
/// This module declares the node types of the abstract syntax tree. Operator
/// chains are stored as right-recursive continuations (`ArithTail`,
/// `BoolTail`) so the grammar needs no left recursion. The tree is built by
/// the parser and never modified afterwards.
pub mod ast;
/// Resource limits shared by the parser and the interpreter.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while lexing, parsing
/// or running a program, and the [`error::ErrorKind`] taxonomy they map to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and the offending source line to parse failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The grammar catalog that drives the parser.
///
/// Lists the nonterminals and productions of the IMP grammar and the static
/// parse table mapping a nonterminal and a lookahead token to a production.
pub mod grammar;
/// Orchestrates lexing, parsing and evaluation.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// environment to provide a complete runtime for IMP programs.
pub mod interpreter;

/// Parses and runs `source`, returning the final environment.
///
/// When `report` is set, the environment is printed to stdout once the
/// program completes, in the order variables were first assigned.
///
/// # Errors
/// Returns an error if parsing fails or if the program fails at runtime.
///
/// # Examples
/// ```
/// use imp::run_source;
///
/// let env = run_source("i = 5 + 21 / 4;", false).unwrap();
/// assert_eq!(env.get("i"), Some(10));
///
/// // `y` is never assigned.
/// assert!(run_source("i = y;", false).is_err());
/// ```
pub fn run_source(source: &str, report: bool) -> Result<Environment, Error> {
    run_source_with_limits(source, report, Limits::default())
}

/// Like [`run_source`], with explicit nesting limits for both parsing and
/// evaluation.
///
/// # Errors
/// Returns an error if parsing fails or if the program fails at runtime.
pub fn run_source_with_limits(source: &str,
                              report: bool,
                              limits: Limits)
                              -> Result<Environment, Error> {
    let program = Parser::new(source)?.with_limits(limits).parse()?;

    let mut interpreter = Interpreter::with_limits(limits);
    let env = interpreter.run(&program)?;

    if report {
        print!("{}", env.report());
    }

    Ok(env.clone())
}

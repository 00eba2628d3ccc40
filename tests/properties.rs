//! Property tests for the lexer, parser and arithmetic.
//!
//! These check that:
//! 1. Lexing and parsing never panic on arbitrary input
//! 2. Parsing is deterministic
//! 3. Division truncates toward zero for every pair of operands

use imp::{
    ast::{ArithExp, ArithTail, Int},
    error::{ErrorKind, RuntimeError},
    interpreter::{
        evaluator::{Interpreter, arith::truncating_div},
        lexer::Lexer,
        parser::parse,
    },
    run_source,
};
use proptest::prelude::*;

/// Tokens that may appear in an IMP program, valid or not.
fn imp_token() -> impl Strategy<Value = String> {
    prop_oneof![Just("(".to_string()),
                Just(")".to_string()),
                Just("{".to_string()),
                Just("}".to_string()),
                Just(";".to_string()),
                Just("=".to_string()),
                Just("+".to_string()),
                Just("/".to_string()),
                Just("<=".to_string()),
                Just("&&".to_string()),
                Just("!".to_string()),
                Just("-".to_string()),
                Just("*".to_string()),
                Just("if".to_string()),
                Just("else".to_string()),
                Just("while".to_string()),
                Just("true".to_string()),
                Just("false".to_string()),
                (0i64..1000).prop_map(|n| n.to_string()),
                "[a-z_][a-z0-9_]{0,6}".prop_map(|s| s),
                Just("\n".to_string()),]
}

fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(imp_token(), 0..60).prop_map(|tokens| tokens.join(" "))
}

/// Straight-line programs built from assignments.
fn assignment_program() -> impl Strategy<Value = String> {
    let assignment = ("v[a-z0-9]{0,2}", 0i64..1000, prop::option::of((any::<bool>(), 1i64..100)))
        .prop_map(|(name, lhs, rhs)| match rhs {
            None => format!("{name} = {lhs};"),
            Some((true, rhs)) => format!("{name} = {lhs} + {rhs};"),
            Some((false, rhs)) => format!("{name} = {lhs} / {rhs};"),
        });
    prop::collection::vec(assignment, 0..20).prop_map(|lines| lines.join("\n"))
}

fn quotient(lhs: i64, rhs: i64) -> ArithExp {
    ArithExp::IntTerm { value: Int(lhs),
                        tail:  ArithTail::Div { next: Box::new(ArithExp::IntTerm { value: Int(rhs),
                                                                                    tail:  ArithTail::Empty, }),
                                                tail: Box::new(ArithTail::Empty), }, }
}

proptest! {
    #[test]
    fn lexer_never_panics(source in "[\\x00-\\x7F]{0,300}") {
        let _ = Lexer::new(&source);
    }

    #[test]
    fn parser_never_panics(source in token_soup()) {
        if let Err(error) = parse(&source) {
            prop_assert!(error.line >= 1);
            prop_assert!(matches!(error.kind(), ErrorKind::Syntax | ErrorKind::ResourceExhausted));
        }
    }

    #[test]
    fn parsing_is_deterministic(source in token_soup()) {
        prop_assert_eq!(parse(&source), parse(&source));
    }

    #[test]
    fn assignment_programs_parse_and_run(source in assignment_program()) {
        let program = parse(&source).unwrap();
        prop_assert_eq!(&program, &parse(&source).unwrap());
        prop_assert!(run_source(&source, false).is_ok());
    }

    #[test]
    fn sums_add(lhs in 0i64..1_000_000, rhs in 0i64..1_000_000) {
        let env = run_source(&format!("x = {lhs} + {rhs};"), false).unwrap();
        prop_assert_eq!(env.get("x"), Some(lhs + rhs));
    }

    #[test]
    fn division_truncates_toward_zero(lhs in any::<i64>(), rhs in any::<i64>()) {
        prop_assume!(rhs != 0);
        prop_assume!(!(lhs == i64::MIN && rhs == -1));

        let quotient = truncating_div(lhs, rhs).unwrap();
        let magnitude = i128::from(lhs).abs() / i128::from(rhs).abs();
        let sign = i128::from(lhs).signum() * i128::from(rhs).signum();
        prop_assert_eq!(i128::from(quotient), sign * magnitude);
    }

    #[test]
    fn division_by_zero_always_fails(lhs in any::<i64>()) {
        prop_assert_eq!(truncating_div(lhs, 0), Err(RuntimeError::DivisionByZero { dividend: lhs }));
    }

    #[test]
    fn evaluator_divides_like_truncating_div(lhs in any::<i64>(), rhs in any::<i64>()) {
        let result = Interpreter::new().eval_arith_exp(&quotient(lhs, rhs));
        prop_assert_eq!(result, truncating_div(lhs, rhs));
    }
}

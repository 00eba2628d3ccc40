use imp::{
    error::{ErrorKind, ParseError},
    interpreter::lexer::{Lexer, Token, TokenKind, TokenSource},
};

fn tokens(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source).unwrap_or_else(|e| panic!("Lexing failed: {e}"));
    let mut out = Vec::new();
    while let Some(token) = lexer.next() {
        out.push(token);
    }
    out
}

#[test]
fn positive_integers() {
    assert_eq!(tokens("123 456"), vec![Token::Int(123), Token::Int(456)]);
}

#[test]
fn negative_integers_are_not_literals() {
    assert_eq!(tokens("-123"), vec![Token::Minus, Token::Int(123)]);
    assert_eq!(tokens("10-5"), vec![Token::Int(10), Token::Minus, Token::Int(5)]);
}

#[test]
fn identifiers() {
    assert_eq!(tokens("foo __hi__ bar_foo20"),
               vec![Token::Id("foo".to_string()),
                    Token::Id("__hi__".to_string()),
                    Token::Id("bar_foo20".to_string())]);
}

#[test]
fn booleans_only_on_exact_text() {
    let id = |s: &str| Token::Id(s.to_string());
    assert_eq!(tokens("true false False True truet falsef istrue ifalse"),
               vec![Token::Bool(true),
                    Token::Bool(false),
                    id("False"),
                    id("True"),
                    id("truet"),
                    id("falsef"),
                    id("istrue"),
                    id("ifalse")]);
}

#[test]
fn keywords_win_over_identifiers() {
    assert_eq!(tokens("if else while for iff elsewhere"),
               vec![Token::If,
                    Token::Else,
                    Token::While,
                    Token::For,
                    Token::Id("iff".to_string()),
                    Token::Id("elsewhere".to_string())]);
}

#[test]
fn arithmetic_operators() {
    assert_eq!(tokens("++=/ /+="),
               vec![Token::Plus,
                    Token::Plus,
                    Token::Assign,
                    Token::Divide,
                    Token::Divide,
                    Token::Plus,
                    Token::Assign]);
    assert_eq!(tokens("- *"), vec![Token::Minus, Token::Times]);
}

#[test]
fn logic_operators() {
    assert_eq!(tokens("&& !&&&&!!"),
               vec![Token::And,
                    Token::Negation,
                    Token::And,
                    Token::And,
                    Token::Negation,
                    Token::Negation]);
    assert_eq!(tokens("||"), vec![Token::Or]);
}

#[test]
fn comparison_operators() {
    assert_eq!(tokens("<=<= <="), vec![Token::Leq, Token::Leq, Token::Leq]);
    assert_eq!(tokens("== != >= < >"),
               vec![Token::Eq, Token::Neq, Token::Geq, Token::Lt, Token::Gt]);
}

#[test]
fn punctuation() {
    assert_eq!(tokens("(){};"),
               vec![Token::LParen,
                    Token::RParen,
                    Token::LCurly,
                    Token::RCurly,
                    Token::Semicolon]);
}

#[test]
fn tracks_lines() {
    let mut lexer = Lexer::new("a\n\nb\r\n  c").unwrap();
    assert_eq!(lexer.current_line(), 1);
    lexer.next();
    assert_eq!(lexer.current_line(), 3);
    lexer.next();
    assert_eq!(lexer.current_line(), 4);
    lexer.next();
    assert_eq!(lexer.current_line(), 4);
}

#[test]
fn whitespace_produces_no_tokens() {
    assert_eq!(Lexer::new(" \t\r\n\u{c}\n").unwrap().remaining(), 0);
    assert_eq!(tokens("\n\ni\n\n"), vec![Token::Id("i".to_string())]);
}

#[test]
fn exhausted_source_reports_the_last_token_line() {
    let mut lexer = Lexer::new("a\nb;\n\n\n").unwrap();
    while lexer.next().is_some() {}
    assert_eq!(lexer.current_line(), 2);
    assert_eq!(Lexer::new("\n\n").unwrap().current_line(), 1);
}

#[test]
fn end_of_input_is_stable() {
    let mut lexer = Lexer::new("x").unwrap();
    assert_eq!(lexer.remaining(), 1);
    assert_eq!(lexer.next(), Some(Token::Id("x".to_string())));
    for _ in 0..3 {
        assert_eq!(lexer.peek(), None);
        assert_eq!(TokenKind::of(lexer.peek()), TokenKind::Eof);
        assert_eq!(lexer.next(), None);
    }
    assert_eq!(lexer.remaining(), 0);
}

#[test]
fn illegal_characters_are_errors() {
    let error = Lexer::new("i = 1;\nj = 2 $ 3;").unwrap_err();
    assert_eq!(error,
               ParseError::InvalidToken { text: "$".to_string(),
                                          line: 2, });
    assert_eq!(error.kind(), ErrorKind::Syntax);

    assert!(Lexer::new("a & b").is_err());
}

#[test]
fn oversized_integers_are_errors() {
    assert!(Lexer::new("9223372036854775807").is_ok());
    assert!(matches!(Lexer::new("9223372036854775808"),
                     Err(ParseError::InvalidToken { line: 1, .. })));
}

#[test]
fn hand_built_sources() {
    let mut lexer = Lexer::from_tokens(vec![(Token::Id("a".to_string()), 1), (Token::Semicolon, 4)]);
    lexer.next();
    assert_eq!(lexer.current_line(), 4);
    lexer.next();
    assert_eq!(lexer.current_line(), 4);
    assert_eq!(lexer.next(), None);
}

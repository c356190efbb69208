//! End-to-end tests for the front end.
//!
//! These tests drive the public surface from source text through the lexer
//! and parser, including generated inputs checked with proptest.

use monkey::{
    ast::ast::Stmt,
    errors::errors::render_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{lookup_ident, TokenKind},
        TokenStream,
    },
    parser::parser::{parse, Parser},
};
use proptest::prelude::*;

#[test]
fn test_parse_single_let() {
    let mut parser = Parser::new(Lexer::new("let five = 5;", None));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Stmt::Let(stmt) => assert_eq!(stmt.name.value, "five"),
        other => panic!("expected let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_missing_identifier() {
    let (parser, program) = parse(Lexer::new("let = 5;", None));

    assert!(program.is_empty());
    let errors = parser.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("expected next token to be"));
}

#[test]
fn test_parse_from_prepared_tokens() {
    let tokens = tokenize("let a = 1; return a;", Some("main.monkey".to_string()));
    let (parser, program) = parse(TokenStream::new(tokens));

    assert!(parser.errors().is_empty());
    assert_eq!(program.len(), 2);
    assert_eq!(program.statements[1].token_literal(), "return");
}

#[test]
fn test_render_parse_error() {
    let source = "let x 5;";
    let (parser, _) = parse(Lexer::new(source, Some("main.monkey".to_string())));

    let rendered = render_error(&parser.diagnostics()[0], source);

    assert!(rendered.starts_with("Error: UnexpectedToken"));
    assert!(rendered.contains("-> main.monkey"));
    assert!(rendered.contains("1 | let x 5;"));
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,7}".prop_filter("keywords are not identifiers", |name| {
        lookup_ident(name) == TokenKind::Ident
    })
}

fn value() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["1", "x", "+", "(", ")", "{", "}", ",", "fn", "=", "@"]),
        1..6,
    )
    .prop_map(|parts| parts.join(" "))
}

#[derive(Debug, Clone)]
enum Generated {
    Let(String, String),
    Return(String),
}

fn statement() -> impl Strategy<Value = Generated> {
    prop_oneof![
        (identifier(), value()).prop_map(|(name, value)| Generated::Let(name, value)),
        value().prop_map(Generated::Return),
    ]
}

proptest! {
    #[test]
    fn well_formed_statements_parse_without_errors(stmts in prop::collection::vec(statement(), 0..12)) {
        let source: String = stmts
            .iter()
            .map(|stmt| match stmt {
                Generated::Let(name, value) => format!("let {} = {};\n", name, value),
                Generated::Return(value) => format!("return {};\n", value),
            })
            .collect();

        let (parser, program) = parse(Lexer::new(source, None));

        prop_assert!(parser.errors().is_empty(), "errors: {:?}", parser.errors());
        prop_assert_eq!(program.len(), stmts.len());

        for (parsed, generated) in program.iter().zip(&stmts) {
            match (parsed, generated) {
                (Stmt::Let(stmt), Generated::Let(name, _)) => prop_assert_eq!(&stmt.name.value, name),
                (Stmt::Return(_), Generated::Return(_)) => {}
                (parsed, generated) => prop_assert!(false, "{:?} parsed as {:?}", generated, parsed),
            }
        }
    }

    #[test]
    fn arbitrary_input_terminates(source in "[ a-z0-9=+,;(){}@\n]{0,64}") {
        let tokens = tokenize(source.clone(), None);
        let lets = tokens.iter().filter(|t| t.is(TokenKind::Let)).count();
        let returns = tokens.iter().filter(|t| t.is(TokenKind::Return)).count();

        let (parser, program) = parse(Lexer::new(source, None));

        prop_assert!(program.len() <= lets + returns);
        prop_assert!(parser.errors().len() <= lets);
    }
}

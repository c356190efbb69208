//! Unit tests for error handling.

use crate::errors::errors::{get_line_at_position, render_error, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn unexpected(expected: TokenKind, received: TokenKind, token: &str, offset: u32) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            expected,
            received,
            token: token.to_string(),
        },
        Position(offset, Rc::new("test.monkey".to_string())),
    )
}

#[test]
fn test_error_message() {
    let error = unexpected(TokenKind::Ident, TokenKind::Assign, "=", 4);

    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got = instead"
    );
}

#[test]
fn test_error_name_and_position() {
    let error = unexpected(TokenKind::Assign, TokenKind::Int, "5", 42);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.monkey");
}

#[test]
fn test_error_tip_suggestion() {
    let error = unexpected(TokenKind::Assign, TokenKind::Int, "5", 0);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Unexpected token: `5`, expected `=`"),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_at_end_of_input() {
    let error = unexpected(TokenKind::Ident, TokenKind::EOF, "", 3);

    assert_eq!(error.get_tip().to_string(), "expected `IDENT` before end of input");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_get_line_at_position() {
    let source = "Hello, world!\nThis is a test file.\n\nTesting { }\n";

    let (line_number, line, line_pos) = get_line_at_position(source, 10).unwrap();
    assert_eq!(line_number, 1);
    assert_eq!(line, "Hello, world!\n");
    assert_eq!(line_pos, 10);

    let (line_number, line, line_pos) = get_line_at_position(source, 44).unwrap();
    assert_eq!(line_number, 4);
    assert_eq!(line, "Testing { }\n");
    assert_eq!(line_pos, 8);
}

#[test]
fn test_get_line_past_end() {
    assert!(get_line_at_position("let x = 1;", 10).is_none());
    assert!(get_line_at_position("", 0).is_none());
}

#[test]
fn test_render_error() {
    let source = "let a = 1;\nlet x 5;\n";
    let error = unexpected(TokenKind::Assign, TokenKind::Int, "5", 17);

    let rendered = render_error(&error, source);

    assert_eq!(
        rendered,
        "Error: UnexpectedToken (Unexpected token: `5`, expected `=`)\n\
         -> test.monkey\n  |\n2 | let x 5;\n  | ------^\n"
    );
}

#[test]
fn test_render_error_strips_indentation() {
    let source = "    let = 5;";
    let error = unexpected(TokenKind::Ident, TokenKind::Assign, "=", 8);

    let rendered = render_error(&error, source);

    assert!(rendered.contains("1 | let = 5;\n"));
    assert!(rendered.ends_with("  | ----^\n"));
}

#[test]
fn test_render_error_at_end_of_input() {
    let error = unexpected(TokenKind::Ident, TokenKind::EOF, "", 3);

    let rendered = render_error(&error, "let");

    assert_eq!(
        rendered,
        "Error: UnexpectedToken (expected `IDENT` before end of input)\n-> test.monkey\n"
    );
}

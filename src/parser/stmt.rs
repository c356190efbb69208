use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{LetStmt, ReturnStmt},
    },
    lexer::{tokens::TokenKind, Scanner},
};

use super::parser::Parser;

/// Dispatches on the current token. Tokens that start no known statement yield `None`
/// without recording an error.
pub fn parse_stmt<S: Scanner>(parser: &mut Parser<S>) -> Option<Stmt> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser).map(Stmt::Let),
        TokenKind::Return => Some(Stmt::Return(parse_return_stmt(parser))),
        _ => None,
    }
}

pub fn parse_let_stmt<S: Scanner>(parser: &mut Parser<S>) -> Option<LetStmt> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // TODO: parse the bound value once expressions are supported
    parser.skip_to_semicolon();

    Some(LetStmt { token, name })
}

pub fn parse_return_stmt<S: Scanner>(parser: &mut Parser<S>) -> ReturnStmt {
    let token = parser.current_token().clone();

    parser.advance();

    // TODO: parse the returned value once expressions are supported
    parser.skip_to_semicolon();

    ReturnStmt { token }
}

//! Parser state and the top-level parse loop.
//!
//! The parser keeps exactly two tokens of state, `current` and `peek`, and
//! only `advance` moves them. Structural mismatches are appended to an error
//! list instead of aborting, so one malformed statement never stops the rest
//! of the program from being parsed.

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        tokens::{Token, TokenKind},
        Scanner,
    },
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
pub struct Parser<S: Scanner> {
    /// Source of tokens
    scanner: S,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Lookahead mismatches in the order they were found
    errors: Vec<Error>,
}

impl<S: Scanner> Parser<S> {
    /// Creates a new Parser, reading two tokens so `current` and `peek` are both set.
    pub fn new(mut scanner: S) -> Self {
        let current = scanner.next_token();
        let peek = scanner.next_token();

        Parser {
            scanner,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the scanner.
    pub fn advance(&mut self) {
        let next = self.scanner.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the peek token has the expected kind.
    ///
    /// On a mismatch the error is recorded, the window is left untouched and
    /// `false` is returned; the caller abandons its statement.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.advance();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                received: self.peek.kind,
                token: self.peek.value.clone(),
            },
            self.peek.span.start.clone(),
        );
        debug!(position = error.get_position().0, "{}", error);
        self.errors.push(error);
    }

    /// Skips tokens until the current one is a semicolon or end of input.
    ///
    /// Stands in for value-expression parsing.
    pub fn skip_to_semicolon(&mut self) {
        while !self.current_token_is(TokenKind::Semicolon) && !self.current_token_is(TokenKind::EOF)
        {
            self.advance();
        }
    }

    /// Every recorded diagnostic, rendered as a message, in the order found.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// The recorded diagnostics with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are dropped; their errors remain in
    /// `errors()`, which callers must check to know if the result is complete.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                trace!(kind = %stmt.token().kind, "parsed statement");
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }
}

/// Parses everything the scanner yields.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding any errors found
/// - The parsed Program
pub fn parse<S: Scanner>(scanner: S) -> (Parser<S>, Program) {
    let mut parser = Parser::new(scanner);
    let program = parser.parse_program();

    (parser, program)
}

//! Lexical analysis for the front end.
//!
//! This module turns source text into tokens for the parser. It contains:
//!
//! - The token model and the reserved-word table
//! - A regex-driven lexer that produces tokens one at a time
//! - The `Scanner` contract the parser consumes, plus a scanner over a prepared token list

use std::vec::IntoIter;

use tokens::{Token, TokenKind};

use crate::Span;

pub mod lexer;
pub mod tokens;


/// Source of tokens for the parser.
///
/// Implementations must eventually yield `TokenKind::EOF` for finite input and
/// keep yielding it on every later call.
pub trait Scanner {
    fn next_token(&mut self) -> Token;
}

/// Scanner over an already-built list of tokens.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Token,
    exhausted: bool,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            eof: Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span::null(),
            },
            exhausted: false,
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl Scanner for TokenStream {
    fn next_token(&mut self) -> Token {
        if !self.exhausted {
            match self.tokens.next() {
                Some(token) if token.kind != TokenKind::EOF => return token,
                Some(token) => self.eof = token,
                None => {}
            }
            self.exhausted = true;
        }

        self.eof.clone()
    }
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}

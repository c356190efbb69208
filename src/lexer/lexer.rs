use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    tokens::{lookup_ident, Token, TokenKind},
    Scanner,
};

/// Produces a token from the text matched at the lexer's position, or `None` for skipped input.
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RParen, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RBrace, "}") },
    ];
}

/// Regex-driven scanner that hands out one token per call.
///
/// Characters no pattern recognises come back as `Illegal` tokens; the lexer
/// itself never fails. After the source is exhausted every call yields `EOF`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.into(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering the next `len` bytes from the current position.
    pub fn span_of(&self, len: usize) -> Span {
        Span {
            start: self.position(),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }

    fn illegal(&mut self) -> Token {
        let value = match self.remainder().chars().next() {
            Some(ch) => ch.to_string(),
            None => String::new(),
        };
        let span = self.span_of(value.len());
        self.advance_n(value.len());
        MK_TOKEN!(TokenKind::Illegal, value, span)
    }
}

impl Scanner for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                return MK_TOKEN!(TokenKind::EOF, String::new(), self.span_of(0));
            }

            let pattern = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            match pattern {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                        return token;
                    }
                }
                None => return self.illegal(),
            }
        }
    }
}

fn matched_len(lexer: &Lexer, regex: &Regex) -> usize {
    regex.find(lexer.remainder()).map_or(0, |m| m.end())
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    lexer.advance_n(len);
    None
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    let value = lexer.remainder()[..len].to_string();
    let span = lexer.span_of(len);
    lexer.advance_n(len);
    Some(MK_TOKEN!(TokenKind::Int, value, span))
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let len = matched_len(lexer, regex);
    let value = lexer.remainder()[..len].to_string();
    let span = lexer.span_of(len);
    lexer.advance_n(len);
    Some(MK_TOKEN!(lookup_ident(&value), value, span))
}

/// Scans the whole source, returning every token up to and including `EOF`.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

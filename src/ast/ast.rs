use std::slice::Iter;

use crate::{lexer::tokens::Token, Span};

use super::statements::{LetStmt, ReturnStmt};

/// Statement
///
/// Closed set of statement kinds the parser produces. Adding a statement kind
/// means adding a variant here and a matching arm in `parse_stmt`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
}

impl Stmt {
    /// Returns the token that introduced the statement.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().value
    }

    pub fn get_span(&self) -> &Span {
        &self.token().span
    }
}

/// Root of a parsed program. Statements are kept in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Literal of the first statement's token, or an empty string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements.first().map_or("", Stmt::token_literal)
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

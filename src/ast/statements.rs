use crate::lexer::tokens::Token;

use super::expressions::Identifier;

/// `let <name> = <value>;`
///
/// The value is not parsed yet; the parser only checks that the binding is
/// well formed up to the `=` and skips to the terminating semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
}

/// `return <value>;`, with the value skipped like in `LetStmt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
}

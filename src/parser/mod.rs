//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns a token
//! stream into a `Program`. It handles:
//!
//! - A two-token lookahead window (current and peek) over a `Scanner`
//! - Statement dispatch for `let` and `return` statements
//! - Error accumulation: mismatches are recorded and parsing carries on
//!
//! Value expressions are not parsed yet. Both statement parsers skip their
//! value up to the terminating semicolon.

pub mod parser;
pub mod stmt;

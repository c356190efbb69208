//! Error types and error reporting for the front end.
//!
//! This module defines:
//!
//! - The positioned `Error` recorded by the parser for lookahead mismatches
//! - Error names and suggestions for display
//! - Caret-style rendering of an error against its source text

pub mod errors;

#[cfg(test)]
mod tests;

/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the closed statement variant
/// - expressions: Expression-position nodes (identifiers)
/// - statements: The let and return statement nodes
pub mod ast;
pub mod expressions;
pub mod statements;

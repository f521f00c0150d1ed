/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: the closed family of expression nodes, literals and operators
/// - statements: the closed family of statement nodes
pub mod expressions;
pub mod statements;

/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Node kinds, typed and generic indices, the node trait
/// - nodes: Definitions for every node struct and the program root
/// - store: Per-kind node pools
/// - printer: Renders a program back to source text
pub mod ast;
pub mod nodes;
pub mod printer;
pub mod store;

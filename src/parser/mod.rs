//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! lexer's tokens into nodes in a `Store`. It handles:
//!
//! - Declarations in their five surface forms
//! - Expressions by precedence climbing, with unary prefixes and postfix
//!   call/index/field chains
//! - Procedure and struct literals
//! - Types (named, pointer, array)
//! - Blocks, `return` and control flow statements
//!
//! Rules backtrack on failure, so alternatives can be tried at the same
//! input offset. The first error that reaches the top level stops the parse.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

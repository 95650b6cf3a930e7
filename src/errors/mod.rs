//! Error types and error reporting for the front-end.
//!
//! This module defines:
//!
//! - Error structures with source position information
//! - Syntax error variants and their suggestions
//! - Structural (internal-consistency) errors raised by the AST store
//! - Diagnostic sinks the parser reports through

pub mod diagnostics;
pub mod errors;

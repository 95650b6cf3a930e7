//! Lexical analysis module.
//!
//! Converts source text into an ordered token sequence using an explicit
//! character-classification state machine. It handles:
//!
//! - Identifiers, with post-hoc keyword recognition
//! - Numeric and string literals
//! - One and two-character operators (maximal munch)
//! - Whitespace and comments, which are kept as tokens
//! - Invalid characters, emitted as `TokenKind::Invalid`

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

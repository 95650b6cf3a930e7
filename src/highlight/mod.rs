//! Syntax highlighting for single-line command input.
//!
//! The first token is the command name and is checked against a registry of
//! known commands. Every other token is coloured by its kind.

pub mod highlight;

#[cfg(test)]
mod tests;

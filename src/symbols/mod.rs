//! Top-level symbol registration.
//!
//! Only names and their broad kind are recorded. Type inference and sizing
//! are not performed.

pub mod symbols;

#[cfg(test)]
mod tests;

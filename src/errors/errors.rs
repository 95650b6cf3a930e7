use std::fmt::Display;

use thiserror::Error;

use crate::{ast::ast::NodeKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Of two failed alternatives, keeps the one that got further into the
    /// input. Ties go to `self`.
    pub fn furthest(self, other: Error) -> Error {
        if other.position.offset > self.position.offset {
            other
        } else {
            self
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingInitializer { .. } => "MissingInitializer",
            ErrorImpl::SymbolAlreadyDeclared { .. } => "SymbolAlreadyDeclared",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { found, expected } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::MissingInitializer { name } => ErrorTip::Suggestion(format!(
                "`{}` needs an expression after `:` or `=`",
                name
            )),
            ErrorImpl::SymbolAlreadyDeclared { symbol } => {
                ErrorTip::Suggestion(format!("`{}` is already declared in this scope", symbol))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "split the expression up, at most {} nested levels are supported",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.position.file, self.position.line, self.position.column, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid token {token:?}")]
    InvalidToken { token: String },
    #[error("unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { found: String, expected: String },
    #[error("declaration of {name:?} is missing its initializer")]
    MissingInitializer { name: String },
    #[error("symbol {symbol:?} already declared")]
    SymbolAlreadyDeclared { symbol: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Internal-consistency faults in the AST store. These indicate a bug in
/// whoever produced the index, never a problem with the input program.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    #[error("index kind mismatch: expected {expected:?}, found {found:?}")]
    KindMismatch { expected: NodeKind, found: NodeKind },
    #[error("{kind:?} index {slot} out of bounds (pool length {len})")]
    OutOfBounds { kind: NodeKind, slot: u32, len: usize },
}

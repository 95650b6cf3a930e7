//! Side channel through which the parser reports its failure.

use std::cell::RefCell;

use tracing::error;

use super::errors::Error;

pub trait DiagnosticSink {
    fn report(&self, error: &Error);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Error) {
        let position = diagnostic.get_position();
        error!(
            target: "parser",
            file = %position.file,
            line = position.line,
            column = position.column,
            "{}",
            diagnostic.kind()
        );
    }
}

/// Keeps every reported diagnostic in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    errors: RefCell<Vec<Error>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        CollectingSink::default()
    }

    pub fn errors(&self) -> Vec<Error> {
        self.errors.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, error: &Error) {
        self.errors.borrow_mut().push(error.clone());
    }
}

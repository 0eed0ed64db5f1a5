//! Error types for grid parsing and the simulation engine.

use thiserror::Error;

/// Errors produced while parsing a textual grid.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Input contained no rows
    #[error("grid input is empty")]
    Empty,

    /// A row contained a character that is not a decimal digit
    #[error("line {line}: invalid energy digit {found:?}")]
    InvalidDigit { line: usize, found: char },

    /// A row's width did not match the first row
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors produced by the simulation engine.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The nova search exhausted its step bound
    #[error("no nova within {max_steps} steps")]
    NovaNotFound { max_steps: u32 },
}

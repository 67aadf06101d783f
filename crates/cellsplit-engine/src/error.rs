//! Error types for the formula engine.

use thiserror::Error;

/// Errors that can occur while splitting a formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid range format: {0}")]
    MalformedRange(String),

    #[error("Range {range} has {cells} cells (max {max})")]
    RangeTooLarge {
        range: String,
        cells: usize,
        max: usize,
    },

    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },

    #[error("Formula nested too deeply (depth {depth})")]
    NestingTooDeep { depth: usize },
}

pub type Result<T> = std::result::Result<T, EngineError>;

//! Error types for cellsplit core.

use thiserror::Error;

use cellsplit_engine::EngineError;

/// Errors that can occur while analysing formulas
#[derive(Error, Debug)]
pub enum CellsplitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid output format: {0} (expected text, markdown or json)")]
    UnknownFormat(String),
}

pub type Result<T> = std::result::Result<T, CellsplitError>;

//! cellsplit_engine - Formula splitting engine.
//!
//! Breaks a spreadsheet formula into a flat, level-tagged token list that
//! mirrors its implicit parse tree.

pub mod engine;
pub mod error;

pub use error::{EngineError, Result};

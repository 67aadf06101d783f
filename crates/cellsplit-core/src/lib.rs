//! cellsplit-core - Configuration, formula lists and report rendering.

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;
pub mod storage;

pub use analysis::{Analysis, analyze, analyze_entry};
pub use config::{Config, OutputFormat, load_config};
pub use error::{CellsplitError, Result};
pub use storage::{FormulaEntry, parse_formula_file, parse_formula_list, write_report};

pub use cellsplit_engine::engine::{Token, TokenKind};

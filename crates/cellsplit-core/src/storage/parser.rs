//! Parser for formula list files.
//!
//! One formula per line, either bare (`=A1+B1`) or attached to a cell in the
//! gridline `.grd` style (`C5: =A1+B1`). Non-formula `.grd` cells
//! (`A1: 42`, `B1: "text"`) are skipped, so a saved sheet can be fed in as-is.
//! A bare range (`A1:B2`) would read as such a cell, so it is rejected.

use crate::error::{CellsplitError, Result};
use cellsplit_engine::engine::{CellRef, strip_formula_prefix};
use std::fs;
use std::path::Path;

/// A formula read from a list, with the cell it belongs to if one was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaEntry {
    pub label: Option<String>,
    /// 1-based source line.
    pub line: usize,
    /// Formula text without the leading `=`.
    pub formula: String,
}

/// Parse a formula list file
pub fn parse_formula_file(path: &Path) -> Result<Vec<FormulaEntry>> {
    let content = fs::read_to_string(path)?;
    parse_formula_list(&content)
}

/// Parse formula list content from a string
pub fn parse_formula_list(content: &str) -> Result<Vec<FormulaEntry>> {
    let mut entries = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('=') {
            entries.push(FormulaEntry {
                label: None,
                line: line_num + 1,
                formula: strip_formula_prefix(line).to_string(),
            });
            continue;
        }

        // "CELLREF: VALUE" format
        let Some((cell_ref_str, value_str)) = line.split_once(':') else {
            return Err(CellsplitError::Parse {
                line: line_num + 1,
                message: "Expected '=FORMULA' or 'CELLREF: =FORMULA'".to_string(),
            });
        };

        let cell_ref_str = cell_ref_str.trim();
        let value_str = value_str.trim();

        if CellRef::parse(&cell_ref_str.to_ascii_uppercase()).is_none() {
            return Err(CellsplitError::Parse {
                line: line_num + 1,
                message: format!("Invalid cell reference: {}", cell_ref_str),
            });
        }

        if !value_str.starts_with('=') {
            if CellRef::parse(&value_str.to_ascii_uppercase()).is_some() {
                return Err(CellsplitError::Parse {
                    line: line_num + 1,
                    message: format!("Expected '=' before formula: {}", line),
                });
            }
            tracing::trace!(line = line_num + 1, "skipping non-formula cell");
            continue;
        }

        entries.push(FormulaEntry {
            label: Some(cell_ref_str.to_ascii_uppercase()),
            line: line_num + 1,
            formula: strip_formula_prefix(value_str).to_string(),
        });
    }

    Ok(entries)
}

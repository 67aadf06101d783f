//! Cell references and range expansion.
//!
//! Converts between column letters and 1-based column numbers
//! (`A` = 1, `Z` = 26, `AA` = 27) and enumerates the cells of a range.
//!
//! # Examples
//!
//! ```
//! use cellsplit_engine::engine::expand_range;
//!
//! let cells = expand_range("A1:B2").unwrap();
//! assert_eq!(cells, vec!["A1", "A2", "B1", "B2"]);
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{EngineError, Result};

/// Largest range [`expand_range`] will enumerate.
pub const DEFAULT_MAX_RANGE_CELLS: usize = 1_000_000;

/// A cell position. `col` is 1-based, `row` is the number as written.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub col: usize,
    pub row: usize,
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { col, row }
    }

    /// Parse `A1`-style text. `$` anchors are accepted and ignored; column
    /// letters must be uppercase. Returns None if the input is invalid.
    pub fn parse(text: &str) -> Option<CellRef> {
        let caps = cell_parts_re().captures(text)?;
        let col = CellRef::col_to_number(&caps["letters"])?;
        let row = caps["numbers"].parse::<usize>().ok()?;
        Some(CellRef::new(col, row))
    }

    /// Convert column letters to a 1-based number (A -> 1, AA -> 27).
    pub fn col_to_number(letters: &str) -> Option<usize> {
        if letters.is_empty() {
            return None;
        }
        let mut acc = 0usize;
        for c in letters.bytes() {
            if !c.is_ascii_uppercase() {
                return None;
            }
            let digit = (c - b'A') as usize + 1;
            acc = acc.checked_mul(26)?.checked_add(digit)?;
        }
        Some(acc)
    }

    /// Convert a 1-based column number to letters (1 -> A, 27 -> AA).
    pub fn number_to_col(col: usize) -> String {
        let mut result = String::new();
        let mut n = col;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::number_to_col(self.col), self.row)
    }
}

fn cell_parts_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\$?(?<letters>[A-Z]+)\$?(?<numbers>[0-9]+)$")
            .expect("cell parts regex must compile")
    })
}

/// Split `Sheet1!A1` / `'My Sheet'!A1` into the sheet prefix (with `!`) and the rest.
pub fn split_sheet_prefix(reference: &str) -> (Option<&str>, &str) {
    match reference.rfind('!') {
        Some(bang) => (Some(&reference[..=bang]), &reference[bang + 1..]),
        None => (None, reference),
    }
}

/// Enumerate every cell of `range`, columns in the outer loop and rows in
/// the inner loop. A start past the end on either axis gives no cells.
pub fn expand_range(range: &str) -> Result<Vec<String>> {
    expand_range_limited(range, DEFAULT_MAX_RANGE_CELLS)
}

/// [`expand_range`] with an explicit cell-count limit.
pub fn expand_range_limited(range: &str, max_cells: usize) -> Result<Vec<String>> {
    let malformed = || EngineError::MalformedRange(range.to_string());

    let parts: Vec<&str> = range.split(':').collect();
    if parts.len() != 2 {
        return Err(malformed());
    }

    let (sheet, start) = split_sheet_prefix(parts[0]);
    let (_, end) = split_sheet_prefix(parts[1]);
    let start = CellRef::parse(start).ok_or_else(malformed)?;
    let end = CellRef::parse(end).ok_or_else(malformed)?;

    let cols = end.col.saturating_add(1).saturating_sub(start.col);
    let rows = end.row.saturating_add(1).saturating_sub(start.row);
    let cells = cols.saturating_mul(rows);
    if cells > max_cells {
        return Err(EngineError::RangeTooLarge {
            range: range.to_string(),
            cells,
            max: max_cells,
        });
    }

    let prefix = sheet.unwrap_or("");
    let mut out = Vec::with_capacity(cells);
    for col in start.col..=end.col {
        for row in start.row..=end.row {
            out.push(format!("{}{}", prefix, CellRef::new(col, row)));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_column_major_order() {
        assert_eq!(expand_range("A1:B2").unwrap(), vec!["A1", "A2", "B1", "B2"]);
    }

    #[test]
    fn test_single_column() {
        assert_eq!(
            expand_range("C2:C6").unwrap(),
            vec!["C2", "C3", "C4", "C5", "C6"]
        );
    }

    #[test]
    fn test_anchors_are_ignored() {
        assert_eq!(expand_range("$A$1:$A$2").unwrap(), vec!["A1", "A2"]);
    }

    #[test]
    fn test_sheet_prefix_is_kept() {
        assert_eq!(
            expand_range("Data!B1:C1").unwrap(),
            vec!["Data!B1", "Data!C1"]
        );
        assert_eq!(
            expand_range("'Q1 Sales'!A1:A2").unwrap(),
            vec!["'Q1 Sales'!A1", "'Q1 Sales'!A2"]
        );
    }

    #[test]
    fn test_crosses_z_boundary() {
        assert_eq!(expand_range("Z1:AB1").unwrap(), vec!["Z1", "AA1", "AB1"]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        assert!(expand_range("B2:A1").unwrap().is_empty());
        assert!(expand_range("A5:A1").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_ranges() {
        assert_eq!(
            expand_range("A1"),
            Err(EngineError::MalformedRange("A1".to_string()))
        );
        assert!(matches!(expand_range("A1:B2:C3"), Err(EngineError::MalformedRange(_))));
        assert!(matches!(expand_range("A:B"), Err(EngineError::MalformedRange(_))));
        assert!(matches!(expand_range("a1:b2"), Err(EngineError::MalformedRange(_))));
    }

    #[test]
    fn test_range_limit() {
        assert!(matches!(
            expand_range_limited("A1:B10", 19),
            Err(EngineError::RangeTooLarge { cells: 20, max: 19, .. })
        ));
        assert_eq!(expand_range_limited("A1:B10", 20).unwrap().len(), 20);
    }

    #[test]
    fn test_column_conversions() {
        assert_eq!(CellRef::col_to_number("A"), Some(1));
        assert_eq!(CellRef::col_to_number("Z"), Some(26));
        assert_eq!(CellRef::col_to_number("AA"), Some(27));
        assert_eq!(CellRef::col_to_number("ZZ"), Some(702));
        assert_eq!(CellRef::number_to_col(1), "A");
        assert_eq!(CellRef::number_to_col(28), "AB");
        assert_eq!(CellRef::number_to_col(702), "ZZ");
    }

    #[test]
    fn test_parse_overflow_returns_none() {
        let huge = format!("{}1", "Z".repeat(40));
        assert!(CellRef::parse(&huge).is_none());
    }
}

//! Cell references a formula touches.
//!
//! Collected from an already tokenized formula, so ranges contribute the
//! cells they expanded to.

use std::collections::HashSet;

use super::token::{Token, TokenKind};

/// Distinct `CellRef` values in first-seen order.
pub fn referenced_cells(tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::CellRef)
        .filter(|t| seen.insert(t.value.as_str()))
        .map(|t| t.value.clone())
        .collect()
}

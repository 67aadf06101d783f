//! Formula analysis driver.
//!
//! Applies the configured preprocessing, runs the tokenizer and collects the
//! referenced cells for one formula.

use serde::Serialize;

use cellsplit_engine::engine::{
    Token, Tokenizer, referenced_cells, rewrite_division, strip_formula_prefix,
};

use crate::config::Config;
use crate::error::Result;
use crate::storage::FormulaEntry;

/// Breakdown of one formula.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Analysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The formula as it was split (after prefix removal and rewriting).
    pub formula: String,
    pub tokens: Vec<Token>,
    pub cells: Vec<String>,
}

pub fn analyze(formula: &str, config: &Config) -> Result<Analysis> {
    let formula = strip_formula_prefix(formula);
    let formula = if config.rewrite_division {
        rewrite_division(formula)
    } else {
        formula.to_string()
    };

    let tokens = Tokenizer::new(config.tokenize_options()).tokenize(&formula, 0)?;
    let cells = referenced_cells(&tokens);
    tracing::debug!(formula = %formula, tokens = tokens.len(), cells = cells.len(), "analyzed");

    Ok(Analysis {
        label: None,
        formula,
        tokens,
        cells,
    })
}

pub fn analyze_entry(entry: &FormulaEntry, config: &Config) -> Result<Analysis> {
    let mut analysis = analyze(&entry.formula, config)?;
    analysis.label = entry.label.clone();
    Ok(analysis)
}

//! Formula splitting API.
//!
//! Leaf-first:
//!
//! - [`classify`] - Decide the [`TokenKind`] of a fragment
//! - [`expand_range`] - Enumerate the cells of a range (column-major)
//! - [`split_arguments`] - Split a function call on top-level commas
//! - [`split_top_level`] - Precedence cascade over `+ -`, `*`, `/`, `^`
//! - [`tokenize`] / [`Tokenizer`] - Recursive decomposition into leveled tokens
//! - [`rewrite_division`] - Turn `/` into reciprocal factors before splitting
//! - [`referenced_cells`] - Distinct cell references of a token list

mod args;
mod cell_ref;
mod classify;
mod deps;
mod preprocess;
mod split;
mod token;
mod tokenize;

pub use args::split_arguments;
pub use cell_ref::{CellRef, DEFAULT_MAX_RANGE_CELLS, expand_range, expand_range_limited, split_sheet_prefix};
pub use classify::classify;
pub use deps::referenced_cells;
pub use preprocess::{rewrite_division, strip_formula_prefix};
pub use split::{Precedence, Split, split_at_level, split_top_level, strip_outer_parens};
pub use token::{DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH, Token, TokenKind};
pub use tokenize::{DEFAULT_MAX_DEPTH, TokenizeOptions, Tokenizer, tokenize};

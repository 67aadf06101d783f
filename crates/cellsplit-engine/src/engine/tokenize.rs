//! Recursive tokenizer.
//!
//! Walks the output of [`split_top_level`] and descends into function
//! arguments, ranges and unresolved sub-expressions, appending everything to
//! a single flat list. Levels only drive indentation; they are not tree links.

use tracing::{debug, trace};

use super::args::split_arguments;
use super::cell_ref::{DEFAULT_MAX_RANGE_CELLS, expand_range_limited};
use super::classify::classify;
use super::split::split_top_level;
use super::token::{Token, TokenKind};
use crate::error::{EngineError, Result};

/// Deepest descent a [`Tokenizer`] allows by default.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Knobs for a [`Tokenizer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenizeOptions {
    /// Ranges with more cells than this fail with [`EngineError::RangeTooLarge`].
    pub max_range_cells: usize,
    /// Formulas nested deeper than this fail with [`EngineError::NestingTooDeep`].
    pub max_depth: usize,
    /// Reject unbalanced parentheses up front instead of splitting best-effort.
    pub validate_parens: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        TokenizeOptions {
            max_range_cells: DEFAULT_MAX_RANGE_CELLS,
            max_depth: DEFAULT_MAX_DEPTH,
            validate_parens: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    options: TokenizeOptions,
}

impl Tokenizer {
    pub fn new(options: TokenizeOptions) -> Tokenizer {
        Tokenizer { options }
    }

    /// Decompose `formula` into leveled tokens, starting at `level`.
    pub fn tokenize(&self, formula: &str, level: usize) -> Result<Vec<Token>> {
        debug!(formula, level, "tokenizing");
        if self.options.validate_parens {
            check_balanced(formula)?;
        }
        let mut out = Vec::new();
        self.descend(formula, level, 0, &mut out)?;
        Ok(out)
    }

    fn descend(
        &self,
        fragment: &str,
        level: usize,
        depth: usize,
        out: &mut Vec<Token>,
    ) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(EngineError::NestingTooDeep { depth });
        }
        for token in split_top_level(fragment, level) {
            match token.kind {
                TokenKind::Invalid => {
                    trace!(value = %token.value, "dropping invalid fragment");
                }
                TokenKind::Number | TokenKind::CellRef | TokenKind::Operator => out.push(token),
                TokenKind::RangeRef => {
                    let cells = expand_range_limited(&token.value, self.options.max_range_cells)?;
                    let cell_level = token.level + 1;
                    out.push(token);
                    out.extend(
                        cells
                            .into_iter()
                            .map(|cell| Token::new(cell, TokenKind::CellRef, cell_level)),
                    );
                }
                TokenKind::Function => {
                    let args = split_arguments(&token.value);
                    out.push(token);
                    for arg in args {
                        self.descend_argument(&arg, level, depth, out)?;
                    }
                }
                TokenKind::Expression => {
                    // An unsplittable expression comes back unchanged; stop there.
                    // The check is against the parent fragment, so a piece cut out
                    // of a larger split is listed once more one level down.
                    let progressed = token.value != fragment.trim();
                    let value = token.value.clone();
                    out.push(token);
                    if progressed {
                        self.descend(&value, level + 1, depth + 1, out)?;
                    } else {
                        debug!(value = %value, "expression cannot be split further");
                    }
                }
            }
        }
        Ok(())
    }

    fn descend_argument(
        &self,
        arg: &str,
        level: usize,
        depth: usize,
        out: &mut Vec<Token>,
    ) -> Result<()> {
        match classify(arg) {
            TokenKind::Invalid => {
                trace!(arg, "dropping invalid argument");
                Ok(())
            }
            TokenKind::CellRef | TokenKind::RangeRef | TokenKind::Function => {
                self.descend(arg, level + 1, depth + 1, out)
            }
            kind => {
                out.push(Token::new(arg, kind, level + 1));
                self.descend(arg, level + 2, depth + 1, out)
            }
        }
    }
}

/// Tokenize with default options.
///
/// ```
/// use cellsplit_engine::engine::{tokenize, TokenKind};
///
/// let tokens = tokenize("A1:B2", 0).unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::RangeRef);
/// assert_eq!(tokens.len(), 5);
/// ```
pub fn tokenize(formula: &str, level: usize) -> Result<Vec<Token>> {
    Tokenizer::default().tokenize(formula, level)
}

/// Parentheses outside string literals must pair up.
fn check_balanced(formula: &str) -> Result<()> {
    let mut open: Vec<usize> = Vec::new();
    let mut in_string = false;

    for (i, b) in formula.bytes().enumerate() {
        match b {
            b'"' => in_string = !in_string,
            _ if in_string => {}
            b'(' => open.push(i),
            b')' => {
                if open.pop().is_none() {
                    return Err(EngineError::UnbalancedParentheses { position: i });
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(position) => Err(EngineError::UnbalancedParentheses { position }),
        None => Ok(()),
    }
}

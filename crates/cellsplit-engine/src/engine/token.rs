//! Token data model.
//!
//! A [`Token`] is one line of the decomposition: a text fragment, its
//! category and a nesting level used only for indentation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::classify::classify;

/// Spaces per level when rendering a token line.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Widest indent [`Token::render`] will use per level.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Cap on the total indent of a rendered line.
const MAX_INDENT: usize = 4096;

/// Category of a formula fragment.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// `NAME(args...)` call site.
    Function,
    Number,
    /// Bare run of operator or parenthesis characters.
    Operator,
    CellRef,
    RangeRef,
    /// Unresolved sub-formula that needs further splitting.
    Expression,
    /// Leftover junk (empty, leading operator or quote). Never emitted.
    Invalid,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Function => "Function",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::CellRef => "CellRef",
            TokenKind::RangeRef => "RangeRef",
            TokenKind::Expression => "Expression",
            TokenKind::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: String,
    pub kind: TokenKind,
    pub level: usize,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, level: usize) -> Token {
        Token {
            value: value.into(),
            kind,
            level,
        }
    }

    /// Build a token whose kind is decided by [`classify`].
    pub fn classified(value: impl Into<String>, level: usize) -> Token {
        let value = value.into();
        let kind = classify(&value);
        Token { value, kind, level }
    }

    /// Render as `"{indent}{value} - {kind}"`, indenting `level * indent_width`
    /// spaces. The width is capped at [`MAX_INDENT_WIDTH`].
    pub fn render(&self, indent_width: usize) -> String {
        let indent = self
            .level
            .saturating_mul(indent_width.min(MAX_INDENT_WIDTH))
            .min(MAX_INDENT);
        format!(
            "{}{} - {}",
            " ".repeat(indent),
            self.value,
            self.kind
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_INDENT_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_indents_four_spaces_per_level() {
        let token = Token::new("C10", TokenKind::CellRef, 2);
        assert_eq!(token.to_string(), "        C10 - CellRef");
    }

    #[test]
    fn test_render_custom_indent() {
        let token = Token::new("SUM(A1:A2)", TokenKind::Function, 1);
        assert_eq!(token.render(2), "  SUM(A1:A2) - Function");
        assert_eq!(token.render(0), "SUM(A1:A2) - Function");
    }

    #[test]
    fn test_classified_uses_classifier() {
        assert_eq!(Token::classified("42", 0).kind, TokenKind::Number);
        assert_eq!(Token::classified("A1+B1", 3).kind, TokenKind::Expression);
        assert_eq!(Token::classified("A1+B1", 3).level, 3);
    }

    #[test]
    fn test_render_caps_indent_width() {
        let token = Token::new("A1", TokenKind::CellRef, 1);
        assert_eq!(token.render(usize::MAX), token.render(MAX_INDENT_WIDTH));
        let deep = Token::new("A1", TokenKind::CellRef, usize::MAX);
        assert!(deep.render(4).ends_with("A1 - CellRef"));
    }
}

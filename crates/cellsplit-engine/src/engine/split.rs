//! Top-level operator splitting.
//!
//! A fragment is split on the operators of one precedence level that sit
//! outside every parenthesised group. The cascade tries the levels in order
//! (`+ -`, `*`, `/`, `^`) and stops at the first level that splits.
//!
//! `+ -` and `*` split on every top-level occurrence. `/` and `^` scan from
//! the end and split once, at the rightmost top-level occurrence; whatever is
//! left of it stays in the left-hand token for the next pass. The right-hand
//! side of a division is rewritten as a reciprocal (`1/rhs`).
//!
//! Depth counts `(` up and `)` down in both scan directions. Scanning from the
//! end, a group therefore reads as negative depth; that still excludes its
//! contents. Unbalanced input is split best-effort with the same counting.

use super::args::matching_close;
use super::token::Token;

/// Operator precedence levels, loosest binding first.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Precedence {
    Additive,
    Multiplicative,
    Division,
    Exponent,
}

impl Precedence {
    /// Order in which [`split_top_level`] tries the levels.
    pub const CASCADE: [Precedence; 4] = [
        Precedence::Additive,
        Precedence::Multiplicative,
        Precedence::Division,
        Precedence::Exponent,
    ];

    pub fn operators(self) -> &'static [u8] {
        match self {
            Precedence::Additive => b"+-",
            Precedence::Multiplicative => b"*",
            Precedence::Division => b"/",
            Precedence::Exponent => b"^",
        }
    }

    /// Reverse levels scan from the end and split at most once.
    pub fn is_reverse(self) -> bool {
        matches!(self, Precedence::Division | Precedence::Exponent)
    }
}

/// Outcome of splitting a fragment at one precedence level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Split {
    /// No operator of this level at depth zero.
    Unsplit,
    /// N-ary split of a forward level, in source order.
    Parts(Vec<Token>),
    /// Single split of a reverse level: `(left, Some(right))`, or one token
    /// when a `1` on the left was dropped.
    Once(Token, Option<Token>),
}

/// Remove parentheses that wrap the whole fragment, repeatedly, trimming
/// whitespace at each step. `(A1)+(B1)` is left alone.
pub fn strip_outer_parens(fragment: &str) -> &str {
    let mut current = fragment.trim();
    while current.starts_with('(') && matching_close(current, 0) == Some(current.len() - 1) {
        current = current[1..current.len() - 1].trim();
    }
    current
}

pub fn split_at_level(fragment: &str, precedence: Precedence, level: usize) -> Split {
    if precedence.is_reverse() {
        split_reverse(fragment, precedence.operators(), level)
    } else {
        split_forward(fragment, precedence.operators(), level)
    }
}

fn split_forward(fragment: &str, operators: &[u8], level: usize) -> Split {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut last_split = 0usize;

    for (i, b) in fragment.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        if depth == 0 && operators.contains(&b) {
            parts.push(Token::classified(
                strip_outer_parens(&fragment[last_split..i]),
                level,
            ));
            last_split = i + 1;
        }
    }

    if parts.is_empty() {
        return Split::Unsplit;
    }
    if last_split < fragment.len() {
        parts.push(Token::classified(
            strip_outer_parens(&fragment[last_split..]),
            level,
        ));
    }
    Split::Parts(parts)
}

fn split_reverse(fragment: &str, operators: &[u8], level: usize) -> Split {
    let bytes = fragment.as_bytes();
    let mut depth = 0i32;

    for i in (0..bytes.len()).rev() {
        let b = bytes[i];
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
        if depth != 0 || !operators.contains(&b) {
            continue;
        }

        let left = fragment[..i].trim();
        let right = fragment[i + 1..].trim();

        if left == "1" {
            return Split::Once(Token::classified(strip_outer_parens(right), level), None);
        }

        let right = if b == b'/' {
            format!("1/{}", right)
        } else {
            right.to_string()
        };
        return Split::Once(
            Token::classified(strip_outer_parens(left), level),
            Some(Token::classified(strip_outer_parens(&right), level)),
        );
    }

    Split::Unsplit
}

/// Run the precedence cascade on `fragment`, tagging every token with `level`.
///
/// A level that leaves a single piece hands it on to the next level. When no
/// level splits, the result is one token holding the stripped fragment.
pub fn split_top_level(fragment: &str, level: usize) -> Vec<Token> {
    let mut current = fragment.trim().to_string();

    for precedence in Precedence::CASCADE {
        match split_at_level(&current, precedence, level) {
            Split::Unsplit => {}
            Split::Parts(mut parts) => {
                if parts.len() != 1 {
                    return parts;
                }
                if let Some(only) = parts.pop() {
                    current = only.value;
                }
            }
            Split::Once(only, None) => current = only.value,
            Split::Once(left, Some(right)) => return vec![left, right],
        }
    }

    vec![Token::classified(strip_outer_parens(&current), level)]
}

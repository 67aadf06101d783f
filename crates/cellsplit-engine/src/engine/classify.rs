//! Fragment classification.
//!
//! Ordered rules, first match wins:
//!
//! 1. empty, or leading `+ - * / ^ > < ! \ "` -> [`TokenKind::Invalid`]
//! 2. `NAME(...)` with a two-or-more letter uppercase name -> [`TokenKind::Function`]
//! 3. decimal numeral -> [`TokenKind::Number`]
//! 4. only `+ - * / ^ ( )` -> [`TokenKind::Operator`]
//! 5. `[sheet!]START:END` -> [`TokenKind::RangeRef`]
//! 6. `[sheet!]$A$1` -> [`TokenKind::CellRef`]
//! 7. anything else -> [`TokenKind::Expression`]

use regex::Regex;
use std::sync::OnceLock;

use super::args::matching_close;
use super::token::TokenKind;

const INVALID_LEADERS: &[u8] = b"+-*/^><!\\\"";

pub fn classify(fragment: &str) -> TokenKind {
    match fragment.as_bytes().first() {
        None => return TokenKind::Invalid,
        Some(b) if INVALID_LEADERS.contains(b) => return TokenKind::Invalid,
        Some(_) => {}
    }

    if is_function_call(fragment) {
        TokenKind::Function
    } else if number_re().is_match(fragment) {
        TokenKind::Number
    } else if operator_re().is_match(fragment) {
        TokenKind::Operator
    } else if range_re().is_match(fragment) {
        TokenKind::RangeRef
    } else if cell_re().is_match(fragment) {
        TokenKind::CellRef
    } else {
        TokenKind::Expression
    }
}

/// `NAME(` followed by a balanced group that closes the fragment,
/// optionally trailed by a single `^`.
fn is_function_call(fragment: &str) -> bool {
    let Some(m) = function_head_re().find(fragment) else {
        return false;
    };
    let open = m.end() - 1;
    let Some(close) = matching_close(fragment, open) else {
        return false;
    };
    matches!(fragment[close + 1..].trim(), "" | "^")
}

fn function_head_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Z]{2,}\(").expect("function head regex must compile"))
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("number regex must compile"))
}

fn operator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+\-*/^()]+$").expect("operator regex must compile"))
}

fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?:'[^']+'!|[^!+\-*/^()\s]+!)?\$?[A-Z][A-Z]?\$?[0-9]+:\$?[A-Z][A-Z]?\$?[0-9]+$",
        )
        .expect("range reference regex must compile")
    })
}

fn cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:'[^']+'!|[^!+\-*/^()\s]+!)?\$?[A-Z]+\$?[0-9]+$")
            .expect("cell reference regex must compile")
    })
}

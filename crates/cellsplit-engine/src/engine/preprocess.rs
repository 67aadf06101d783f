//! Formula preprocessing.
//!
//! - **Prefix**: `=A1+B1` -> `A1+B1`
//! - **Reciprocal division**: `A1/B1` -> `A1*1/B1`, so every divisor shows up
//!   as a reciprocal factor of one flat product instead of a chain of
//!   right-to-left division splits. String literals are left untouched.

/// Drop the leading `=` of a cell formula along with surrounding whitespace.
pub fn strip_formula_prefix(formula: &str) -> &str {
    let trimmed = formula.trim();
    trimmed.strip_prefix('=').map(str::trim).unwrap_or(trimmed)
}

/// Replace every `/` outside string literals with `*1/`.
pub fn rewrite_division(formula: &str) -> String {
    let mut out = String::with_capacity(formula.len() + formula.len() / 2);
    let mut in_string = false;

    // Doubled quotes inside a literal toggle out and straight back in.
    for ch in formula.chars() {
        match ch {
            '"' => {
                in_string = !in_string;
                out.push(ch);
            }
            '/' if !in_string => out.push_str("*1/"),
            _ => out.push(ch),
        }
    }

    out
}

//! Function argument splitting.

/// Index of the `)` that closes the `(` at `open`, if any.
pub(crate) fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split the argument list of a function call on commas at the call's own depth.
///
/// `SUM(A1, MAX(B1,B2))` -> `["A1", "MAX(B1,B2)"]`. Arguments are trimmed.
/// A call with nothing between its parentheses yields no arguments, and a
/// trailing empty slot (`F(A1,)`) is not reported.
pub fn split_arguments(call: &str) -> Vec<String> {
    let Some(open) = call.find('(') else {
        return Vec::new();
    };
    // Unterminated calls run to the end of the text.
    let close = matching_close(call, open).unwrap_or(call.len());

    let mut args = Vec::new();
    let mut depth = 0i32;
    let mut last_split = open + 1;

    for (i, b) in call.bytes().enumerate().take(close).skip(open + 1) {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => {
                args.push(call[last_split..i].trim().to_string());
                last_split = i + 1;
            }
            _ => {}
        }
    }

    if last_split < close {
        args.push(call[last_split..close].trim().to_string());
    }

    args
}

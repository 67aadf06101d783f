//! Markdown export

use crate::analysis::Analysis;

/// Render analyses as one markdown table per formula.
pub fn render_markdown(analyses: &[Analysis], show_cells: bool) -> String {
    let mut out = String::from("# Formula breakdown\n");

    if analyses.is_empty() {
        out.push_str("\n*No formulas*\n");
        return out;
    }

    for analysis in analyses {
        out.push('\n');
        match &analysis.label {
            Some(label) => out.push_str(&format!(
                "## {}: {}\n\n",
                label,
                escape_markdown(&analysis.formula)
            )),
            None => out.push_str(&format!("## {}\n\n", escape_markdown(&analysis.formula))),
        }

        out.push_str("| # | Level | Kind | Token |\n");
        out.push_str("|---|---|---|---|\n");
        for (i, token) in analysis.tokens.iter().enumerate() {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                token.level,
                token.kind,
                escape_markdown(&token.value)
            ));
        }

        if show_cells {
            out.push_str(&format!("\nCells: {}\n", analysis.cells.join(", ")));
        }
    }

    out
}

/// Escape special markdown characters in token text
fn escape_markdown(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace('*', "\\*")
        .replace('^', "\\^")
        .replace('\n', " ")
        .replace('\r', "")
}

//! Plain text listing

use crate::analysis::Analysis;

/// Render analyses as indented token listings separated by blank lines.
pub fn render_text(analyses: &[Analysis], indent_width: usize, show_cells: bool) -> String {
    let blocks: Vec<String> = analyses
        .iter()
        .map(|analysis| render_one(analysis, indent_width, show_cells))
        .collect();
    blocks.join("\n")
}

fn render_one(analysis: &Analysis, indent_width: usize, show_cells: bool) -> String {
    let mut out = match &analysis.label {
        Some(label) => format!("Source formula ({}): {}\n\n", label, analysis.formula),
        None => format!("Source formula: {}\n\n", analysis.formula),
    };
    for token in &analysis.tokens {
        out.push_str(&token.render(indent_width));
        out.push('\n');
    }
    if show_cells {
        out.push_str(&format!("\nCells: {}\n", analysis.cells.join(", ")));
    }
    out
}

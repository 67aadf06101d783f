//! Report rendering.
//!
//! - **text**: the classic listing, one `value - Kind` line per token,
//!   indented by level
//! - **markdown**: a table per formula
//! - **json**: the analyses serialized as-is

mod json;
mod md;
mod text;

pub use json::render_json;
pub use md::render_markdown;
pub use text::render_text;

use crate::analysis::Analysis;
use crate::config::{Config, OutputFormat};
use crate::error::Result;

/// Render `analyses` in the configured format.
pub fn render(analyses: &[Analysis], config: &Config) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(analyses, config.indent_width, config.show_cells)),
        OutputFormat::Markdown => Ok(render_markdown(analyses, config.show_cells)),
        OutputFormat::Json => render_json(analyses),
    }
}

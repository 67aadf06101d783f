//! JSON export

use crate::analysis::Analysis;
use crate::error::Result;

/// Serialize analyses as a pretty-printed JSON array.
pub fn render_json(analyses: &[Analysis]) -> Result<String> {
    Ok(serde_json::to_string_pretty(analyses)?)
}

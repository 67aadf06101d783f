//! Writer for rendered reports

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Write rendered report text to `path`, ending it with a newline.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if content.ends_with('\n') {
        fs::write(path, content)?;
    } else {
        fs::write(path, format!("{}\n", content))?;
    }
    Ok(())
}

//! User configuration (`config.toml`).
//!
//! Looked up in the platform config directory (e.g.
//! `~/.config/cellsplit/config.toml`) unless a file is given explicitly.
//! Problems never abort a run: they come back as warnings and the defaults
//! are used instead.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cellsplit_engine::engine::{
    DEFAULT_INDENT_WIDTH, DEFAULT_MAX_DEPTH, DEFAULT_MAX_RANGE_CELLS, MAX_INDENT_WIDTH,
    TokenizeOptions,
};

use crate::error::CellsplitError;

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CellsplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CellsplitError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        })
    }
}

/// Effective settings for a run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Spaces per token level in text output.
    pub indent_width: usize,
    pub format: OutputFormat,
    /// Rewrite `/` as `*1/` before splitting.
    pub rewrite_division: bool,
    /// Reject unbalanced parentheses.
    pub strict: bool,
    pub max_range_cells: usize,
    pub max_depth: usize,
    /// List the referenced cells after each breakdown.
    pub show_cells: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent_width: DEFAULT_INDENT_WIDTH,
            format: OutputFormat::Text,
            rewrite_division: false,
            strict: false,
            max_range_cells: DEFAULT_MAX_RANGE_CELLS,
            max_depth: DEFAULT_MAX_DEPTH,
            show_cells: false,
        }
    }
}

impl Config {
    pub fn tokenize_options(&self) -> TokenizeOptions {
        TokenizeOptions {
            max_range_cells: self.max_range_cells,
            max_depth: self.max_depth,
            validate_parens: self.strict,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    indent_width: Option<usize>,
    format: Option<OutputFormat>,
    rewrite_division: Option<bool>,
    strict: Option<bool>,
    max_range_cells: Option<usize>,
    max_depth: Option<usize>,
    show_cells: Option<bool>,
}

/// Parse `config.toml` content on top of the defaults.
pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    let file: ConfigFile = toml::from_str(content)?;
    let defaults = Config::default();
    Ok(Config {
        indent_width: file
            .indent_width
            .unwrap_or(defaults.indent_width)
            .min(MAX_INDENT_WIDTH),
        format: file.format.unwrap_or(defaults.format),
        rewrite_division: file.rewrite_division.unwrap_or(defaults.rewrite_division),
        strict: file.strict.unwrap_or(defaults.strict),
        max_range_cells: file.max_range_cells.unwrap_or(defaults.max_range_cells),
        max_depth: file.max_depth.unwrap_or(defaults.max_depth),
        show_cells: file.show_cells.unwrap_or(defaults.show_cells),
    })
}

/// Load the configuration from `config_file`, or the user config file when
/// none is given. Returns the config plus any warnings.
pub fn load_config(config_file: Option<&Path>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let path = config_file.map(Path::to_path_buf).or_else(user_config_path);

    let Some(path) = path else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    let config = match std::fs::metadata(&path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(&path) {
            Ok(content) => match parse_config(&content) {
                Ok(config) => Some(config),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };

    tracing::debug!(path = %path.display(), loaded = config.is_some(), "config file");
    (config.unwrap_or_default(), warnings)
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "cellsplit")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_config_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_config_overrides() {
        let config = parse_config(
            "indent_width = 2\nformat = \"json\"\nrewrite_division = true\nstrict = true\nmax_range_cells = 10\nmax_depth = 32\nshow_cells = true\n",
        )
        .unwrap();
        assert_eq!(
            config,
            Config {
                indent_width: 2,
                format: OutputFormat::Json,
                rewrite_division: true,
                strict: true,
                max_range_cells: 10,
                max_depth: 32,
                show_cells: true,
            }
        );
        assert_eq!(
            config.tokenize_options(),
            TokenizeOptions {
                max_range_cells: 10,
                max_depth: 32,
                validate_parens: true,
            }
        );
    }

    #[test]
    fn test_indent_width_is_clamped() {
        let config = parse_config("indent_width = 1000").unwrap();
        assert_eq!(config.indent_width, MAX_INDENT_WIDTH);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(parse_config("colour = \"red\"").is_err());
        assert!(parse_config("format = \"html\"").is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_missing_explicit_file_warns() {
        let path = std::env::temp_dir().join("cellsplit_missing_config_test.toml");
        let _ = std::fs::remove_file(&path);
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn test_bad_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("cellsplit_bad_config_test.toml");
        std::fs::write(&path, "indent_width = \"wide\"").unwrap();
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert!(warnings[0].starts_with("Failed to parse"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_user_config_path_is_deterministic() {
        // Should never panic and should either be Some(path) or None.
        let _ = user_config_path();
    }
}

//! Command-line argument parsing.

use std::path::PathBuf;

use cellsplit_core::{Config, OutputFormat};
use cellsplit_engine::engine::MAX_INDENT_WIDTH;

pub fn print_usage() {
    eprintln!("Usage: cellsplit [OPTIONS] [FORMULA]...");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FORMULA]...              Formulas to break down (leading '=' optional)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --file <FILE>         Read formulas from a list or .grd file (can be repeated)");
    eprintln!("  --samples                 Break down the built-in sample formulas");
    eprintln!("  --format <FORMAT>         Output format: text, markdown or json (default: text)");
    eprintln!("  -o, --output <FILE>       Write the report to a file instead of stdout");
    eprintln!("  --indent <N>              Spaces per level in text output (default: 4)");
    eprintln!("  --reciprocal              Rewrite '/' as '*1/' before splitting");
    eprintln!("  --strict                  Reject formulas with unbalanced parentheses");
    eprintln!("  --cells                   List the cells each formula references");
    eprintln!("  --config <FILE>           Load settings from this TOML file");
    eprintln!("  -h, --help                Print help");
}

/// Parsed command line. `None`/`false` leaves the config file's value alone.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub formulas: Vec<String>,
    pub files: Vec<PathBuf>,
    pub samples: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub indent: Option<usize>,
    pub reciprocal: bool,
    pub strict: bool,
    pub cells: bool,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Options {
    /// Layer command-line flags over the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(indent) = self.indent {
            config.indent_width = indent;
        }
        config.rewrite_division |= self.reciprocal;
        config.strict |= self.strict;
        config.show_cells |= self.cells;
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                options.help = true;
                return Ok(options);
            }
            "-f" | "--file" => {
                i += 1;
                let value = args.get(i).ok_or("--file requires a file path")?;
                options.files.push(PathBuf::from(value));
            }
            "-o" | "--output" => {
                i += 1;
                let value = args.get(i).ok_or("--output requires a file path")?;
                options.output = Some(PathBuf::from(value));
            }
            "--format" => {
                i += 1;
                let value = args.get(i).ok_or("--format requires a value")?;
                let format = value
                    .parse::<OutputFormat>()
                    .map_err(|e| e.to_string())?;
                options.format = Some(format);
            }
            "--indent" => {
                i += 1;
                let value = args.get(i).ok_or("--indent requires a number")?;
                let indent = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n <= MAX_INDENT_WIDTH)
                    .ok_or_else(|| format!("Invalid indent: {} (0-{})", value, MAX_INDENT_WIDTH))?;
                options.indent = Some(indent);
            }
            "--config" => {
                i += 1;
                let value = args.get(i).ok_or("--config requires a file path")?;
                options.config = Some(PathBuf::from(value));
            }
            "--samples" => options.samples = true,
            "--reciprocal" => options.reciprocal = true,
            "--strict" => options.strict = true,
            "--cells" => options.cells = true,
            // A formula may itself start with '-'.
            arg if arg.starts_with("--") || (arg.starts_with('-') && arg.len() == 2) => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => options.formulas.push(args[i].to_string()),
        }
        i += 1;
    }

    if options.formulas.is_empty() && options.files.is_empty() && !options.samples {
        return Err("No formula given".to_string());
    }

    Ok(options)
}

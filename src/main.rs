//! Cellsplit - break spreadsheet formulas into a leveled token listing

mod cli;
mod samples;

use std::env;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cellsplit_core::report;
use cellsplit_core::{FormulaEntry, analyze_entry, load_config, parse_formula_file, write_report};

use crate::cli::Options;
use crate::samples::SAMPLE_FORMULAS;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match cli::parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            cli::print_usage();
            std::process::exit(1);
        }
    };

    if options.help {
        cli::print_usage();
        return;
    }

    if let Err(e) = run(&options) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(options: &Options) -> Result<()> {
    let (mut config, warnings) = load_config(options.config.as_deref());
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    options.apply(&mut config);

    let mut entries: Vec<FormulaEntry> = options
        .formulas
        .iter()
        .enumerate()
        .map(|(i, formula)| FormulaEntry {
            label: None,
            line: i + 1,
            formula: formula.clone(),
        })
        .collect();

    for path in &options.files {
        let parsed = parse_formula_file(path)
            .with_context(|| format!("Failed to read formulas from {}", path.display()))?;
        entries.extend(parsed);
    }

    if options.samples {
        entries.extend(SAMPLE_FORMULAS.iter().enumerate().map(|(i, formula)| FormulaEntry {
            label: None,
            line: i + 1,
            formula: formula.to_string(),
        }));
    }

    tracing::debug!(formulas = entries.len(), format = %config.format, "analysing");

    let mut analyses = Vec::with_capacity(entries.len());
    for entry in &entries {
        let analysis = analyze_entry(entry, &config)
            .with_context(|| format!("Failed to split {}", entry.formula))?;
        analyses.push(analysis);
    }

    let rendered = report::render(&analyses, &config)?;

    match &options.output {
        Some(path) => {
            write_report(path, &rendered)?;
            eprintln!("Report written to {}", path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

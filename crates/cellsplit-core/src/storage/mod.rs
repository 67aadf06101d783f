//! Reading formula lists and writing reports.

mod parser;
mod writer;

pub use parser::{FormulaEntry, parse_formula_file, parse_formula_list};
pub use writer::write_report;

//! Integration tests for the cellsplit command line

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        // Tests must not depend on a user's ~/.config/cellsplit/config.toml.
        .arg("--config")
        .arg("/nonexistent/cellsplit-test-config.toml")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_single_formula_listing() {
    let (stdout, _, code) = run_command(&["A1/B1/C1"]);
    assert_eq!(
        stdout,
        "Source formula: A1/B1/C1\n\n\
         A1/B1 - Expression\n    A1 - CellRef\n    1/B1 - Expression\n        B1 - CellRef\n\
         1/C1 - Expression\n    C1 - CellRef\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_equals_prefix_is_optional() {
    let (stdout1, _, _) = run_command(&["C10+C11"]);
    let (stdout2, _, _) = run_command(&["=C10+C11"]);
    assert_eq!(stdout1, stdout2);
}

#[test]
fn test_reciprocal_flag() {
    let (stdout, _, code) = run_command(&["--reciprocal", "A1/B1"]);
    assert!(stdout.starts_with("Source formula: A1*1/B1\n"));
    assert!(stdout.contains("\n1/B1 - Expression\n    B1 - CellRef\n"));
    assert_eq!(code, 0);
}

#[test]
fn test_range_expansion_and_cells() {
    let (stdout, _, code) = run_command(&["--cells", "SUM(A1:B2)"]);
    assert!(stdout.contains("    A1:B2 - RangeRef\n        A1 - CellRef\n        A2 - CellRef\n"));
    assert!(stdout.ends_with("Cells: A1, A2, B1, B2\n"));
    assert_eq!(code, 0);
}

#[test]
fn test_samples() {
    let (stdout, _, code) = run_command(&["--samples"]);
    assert_eq!(stdout.matches("Source formula: ").count(), 4);
    assert!(stdout.contains("CHOOSE(C25,C26,C27) - Function\n"));
    assert_eq!(code, 0);
}

#[test]
fn test_json_output() {
    let (stdout, _, code) = run_command(&["--format", "json", "A1:A2"]);
    assert!(stdout.contains("\"kind\": \"RangeRef\""));
    assert!(stdout.contains("\"formula\": \"A1:A2\""));
    assert_eq!(code, 0);
}

#[test]
fn test_strict_rejects_unbalanced() {
    let (_, stderr, code) = run_command(&["--strict", "SUM(A1"]);
    assert!(stderr.contains("Unbalanced parentheses at position 3"));
    assert_eq!(code, 1);
}

#[test]
fn test_no_arguments_prints_usage() {
    let (_, stderr, code) = run_command(&[]);
    assert!(stderr.contains("Usage: cellsplit"));
    assert_eq!(code, 1);
}

#[test]
fn test_missing_config_warns() {
    let (_, stderr, code) = run_command(&["A1"]);
    assert!(stderr.contains("Warning: Config file not found"));
    assert_eq!(code, 0);
}

#[test]
fn test_formula_file_and_markdown_output() {
    use std::fs;

    let input_file = std::env::temp_dir().join("cellsplit_test_formulas.grd");
    let output_file = std::env::temp_dir().join("cellsplit_test_report.md");
    fs::write(&input_file, "# Gridline Spreadsheet\nA1: 1\nB1: =A1*2\n").unwrap();

    let (_, stderr, code) = run_command(&[
        "-f",
        input_file.to_str().unwrap(),
        "--format",
        "markdown",
        "-o",
        output_file.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stderr.contains("Report written to"));

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("## B1: A1\\*2\n"));
    assert!(content.contains("| 1 | 0 | CellRef | A1 |\n"));
    assert!(content.contains("| 2 | 0 | Number | 2 |\n"));

    fs::remove_file(&input_file).ok();
    fs::remove_file(&output_file).ok();
}

#[test]
fn test_malformed_file_reports_line() {
    use std::fs;

    let input_file = std::env::temp_dir().join("cellsplit_test_bad_formulas.txt");
    fs::write(&input_file, "=A1\nA1+B1\n").unwrap();

    let (_, stderr, code) = run_command(&["-f", input_file.to_str().unwrap()]);
    assert!(stderr.contains("Parse error at line 2"));
    assert_eq!(code, 1);

    fs::remove_file(&input_file).ok();
}

#[test]
fn test_oversized_indent_is_rejected() {
    let (_, stderr, code) = run_command(&["--indent", "18446744073709551615", "A1:A2"]);
    assert!(stderr.contains("Invalid indent"));
    assert_eq!(code, 1);
}

#[test]
fn test_deeply_nested_formula_reports_error() {
    let formula = format!("{}A1{}", "(B1+".repeat(2000), ")".repeat(2000));
    let (_, stderr, code) = run_command(&[&formula]);
    assert!(stderr.contains("nested too deeply"));
    assert_eq!(code, 1);
}

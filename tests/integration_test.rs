//! Integration tests for the ACH generator CLI.
//!
//! These tests run the actual binary against CSV files in a temporary
//! directory and inspect the file it writes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const XERO_CSV: &str = "35.21,240909240000123456789,Jane Doe,REF1,INV-1\n\
100,123456789987654,John Roe,REF2,INV-2\n";

const GENERIC_CSV: &str = "Receiver Name,Receiver Account Number,Receiver Routing Number,Amount,Transaction Identifier,Reference\n\
Jane Doe,000123456789,240909240,35.21,INV-1,REF1\n";

const GENERIC_PROFILE: &str = r#"{
    "Company Name": "WIS/WEM LLC",
    "Company Id": "1522206279",
    "Company Financial Services": "Acme Services",
    "Company Routing Number": "522206279",
    "Bank Name": "First Bank",
    "Bank Routing Number": "240909240",
    "Accounting System": "Default"
}"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Files in `dir` with a .txt extension
fn generated_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().map(|e| e == "txt").unwrap_or(false))
        .collect()
}

/// Run the binary and return the path it reports on stdout
fn run_generator(args: &[&Path]) -> PathBuf {
    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    let assert = cmd.args(args).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    PathBuf::from(stdout.trim())
}

#[test]
fn test_xero_csv_with_default_profile() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", XERO_CSV);

    let output = run_generator(&[&input]);
    assert_eq!(output.parent().unwrap(), dir.path());

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.split("\r\n").collect();
    assert_eq!(lines.len(), 10);
    assert!(lines.iter().all(|l| l.len() == 94));
    assert!(lines[0].starts_with("101"));
    assert!(lines[0].contains("DUMMY BANK"));
    assert_eq!(&lines[0][86..94], "REF1    ");
    assert_eq!(&lines[1][1..4], "225");
    assert!(lines[2].starts_with("627240909240000123456789"));
    assert!(lines[3].starts_with("627123456789987654"));
    assert_eq!(&lines[4][10..20], "0036436602");
    assert_eq!(&lines[4][20..32], "000000013521");
    assert_eq!(lines[9], "9".repeat(94));
}

#[test]
fn test_generic_csv_with_profile() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", GENERIC_CSV);
    let profile = write_file(&dir, "company.json", GENERIC_PROFILE);

    let output = run_generator(&[&input, &profile]);
    let content = fs::read_to_string(output).unwrap();
    let lines: Vec<&str> = content.split("\r\n").collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(&lines[0][3..23], " 240909240 522206279");
    assert_eq!(&lines[1][4..20], "WIS/WEM LLC     ");
    assert_eq!(&lines[1][79..87], "24090924");
    assert_eq!(&lines[2][79..94], "240909240000001");
}

#[test]
fn test_output_name_is_timestamp() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", XERO_CSV);

    let output = run_generator(&[&input]);
    let stem = output.file_stem().unwrap().to_str().unwrap().to_string();
    assert_eq!(stem.len(), 15);
    assert_eq!(&stem[8..9], "_");
    assert!(stem.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
}

#[test]
fn test_validation_issues_are_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", "abc,,Jane\n");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Row 1: 'Amount' must be a valid numeric value.")
                .and(predicate::str::contains("Row 1: Missing value for 'Receiver Bank Details'")),
        );

    assert!(generated_files(dir.path()).is_empty());
}

#[test]
fn test_invalid_routing_number_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", "10,12345,Jane\n");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid routing number"));

    assert!(generated_files(dir.path()).is_empty());
}

#[test]
fn test_non_ascii_name_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", "5,240909240000123,José Müller\n");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-ASCII"));

    assert!(generated_files(dir.path()).is_empty());
}

#[test]
fn test_empty_csv_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", "");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records"));

    assert!(generated_files(dir.path()).is_empty());
}

#[test]
fn test_wrong_extension_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.xlsx", XERO_CSV);

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a .csv file"));

    assert!(generated_files(dir.path()).is_empty());
}

#[test]
fn test_missing_file_error() {
    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg("nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error").or(predicate::str::contains("Error")));
}

#[test]
fn test_missing_argument_error() {
    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input file"));
}

#[test]
fn test_bad_profile_error() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "payments.csv", XERO_CSV);
    let profile = write_file(&dir, "company.json", "{ not json");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg(&input)
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Company profile error"));
}

#[test]
fn test_template_download() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("template.csv");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg("--template")
        .arg("xero")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Amount,Receiver Bank Details,Receiver Name,Reference,Transaction Identifier\n"
    );
}

#[test]
fn test_template_unknown_dialect() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("template.csv");

    let mut cmd = Command::cargo_bin("ach-generator").unwrap();
    cmd.arg("--template")
        .arg("quickbooks")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown accounting system"));

    assert!(!output.exists());
}

//! E2E tests of the `fw2csv` CLI.
//!
//! Covers fixture conversion, the header toggle, generated sample files
//! and the error paths of each input artifact.

use std::fs;

use assert_cmd::Command;
use e2e_tests::{fixture, write_sample_file, write_spec};
use predicates::prelude::*;
use tempfile::tempdir;

/// Command running the `fw2csv` binary.
///
/// `cargo_bin` is deprecated because of an edge case with custom build
/// directories, but it is the only way to reach a binary of another crate.
#[expect(deprecated)]
fn fw2csv() -> Command {
    Command::cargo_bin("fw2csv").unwrap()
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_fixture_matches_expected_csv() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.csv");

    fw2csv()
        .args([
            "--spec",
            fixture("spec.json").to_str().unwrap(),
            "--input",
            fixture("records_cp1252.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 4 record(s)"));

    let expected = fs::read_to_string(fixture("records_expected.csv")).unwrap();
    let actual = fs::read_to_string(&output).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_quoting_and_transcoding() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.csv");

    fw2csv()
        .args([
            "-s",
            fixture("spec.json").to_str().unwrap(),
            "-i",
            fixture("records_cp1252.txt").to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    // Comma inside a field is quoted, quotes are doubled
    assert!(content.contains(r#""1234 Main St, Apt 1""#));
    assert!(content.contains(r#""said ""hi""""#));
    // windows-1252 input decoded into UTF-8 output
    assert!(content.contains("Café René"));
}

#[test]
fn test_generated_sample_file() {
    let dir = tempdir().unwrap();
    let spec = dir.path().join("spec.json");
    let input = dir.path().join("fixed_width.txt");
    let output = dir.path().join("output.csv");
    write_spec(&spec, &[7, 2], &["Field1", "Field2"], true).unwrap();
    write_sample_file(&input, &[7, 2], 7).unwrap();

    fw2csv()
        .args([
            "--spec",
            spec.to_str().unwrap(),
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted 7 record(s)"));

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Field1,Field2");
    assert_eq!(lines[1], "AAAAAAA,AA");
    assert_eq!(lines[7], "GGGGGGG,GG");
}

#[test]
fn test_header_disabled() {
    let dir = tempdir().unwrap();
    let spec = dir.path().join("spec.json");
    let input = dir.path().join("fixed_width.txt");
    let output = dir.path().join("output.csv");
    write_spec(&spec, &[7, 2], &["Field1", "Field2"], false).unwrap();
    write_sample_file(&input, &[7, 2], 2).unwrap();

    fw2csv()
        .args([
            "--spec",
            spec.to_str().unwrap(),
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "AAAAAAA,AA\nBBBBBBB,BB\n");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_input_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("output.csv");

    fw2csv()
        .args([
            "--spec",
            fixture("spec.json").to_str().unwrap(),
            "--input",
            "/nonexistent/path/to/fixed_width.txt",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(!output.exists(), "no output must be written when the input is missing");
}

#[test]
fn test_failure_reported_once_by_default() {
    let dir = tempdir().unwrap();

    fw2csv()
        .env_remove("RUST_LOG")
        .args([
            "--spec",
            fixture("spec.json").to_str().unwrap(),
            "--input",
            "/nonexistent/path/to/fixed_width.txt",
            "--output",
            dir.path().join("output.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::function(|stderr: &str| stderr.matches("not found").count() == 1));
}

#[test]
fn test_missing_spec_file() {
    let dir = tempdir().unwrap();

    fw2csv()
        .args([
            "--spec",
            dir.path().join("absent.json").to_str().unwrap(),
            "--input",
            fixture("records_cp1252.txt").to_str().unwrap(),
            "--output",
            dir.path().join("output.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load layout specification"));
}

#[test]
fn test_malformed_spec_touches_no_files() {
    let dir = tempdir().unwrap();
    let spec = dir.path().join("spec.json");
    let output = dir.path().join("output.csv");
    fs::write(&spec, "{ \"Offsets\": [7, 2]").unwrap();

    fw2csv()
        .args([
            "--spec",
            spec.to_str().unwrap(),
            "--input",
            fixture("records_cp1252.txt").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error decoding JSON"));

    assert!(!output.exists());
}

#[test]
fn test_string_header_flag_rejected() {
    let dir = tempdir().unwrap();

    fw2csv()
        .args([
            "--spec",
            fixture("spec_header_string.json").to_str().unwrap(),
            "--input",
            fixture("records_cp1252.txt").to_str().unwrap(),
            "--output",
            dir.path().join("output.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a boolean"));
}

#[test]
fn test_column_count_mismatch() {
    let dir = tempdir().unwrap();
    let spec = dir.path().join("spec.json");
    write_spec(&spec, &[7, 2], &["Field1"], true).unwrap();

    fw2csv()
        .args([
            "--spec",
            spec.to_str().unwrap(),
            "--input",
            fixture("records_cp1252.txt").to_str().unwrap(),
            "--output",
            dir.path().join("output.csv").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 field widths but 1 column names"));
}

#[test]
fn test_missing_required_args() {
    fw2csv()
        .args(["--spec", "spec.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input"));
}

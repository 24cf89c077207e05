//! CLI Integration Tests
//!
//! Runs the ratesheet binary against fixture workbooks in a temp dir.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use ratesheet::excel::Workbook;
use ratesheet::CellValue;
use tempfile::TempDir;

fn fixture() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Pricess2.xlsx");
    common::write_fixture(&path);
    (temp_dir, path)
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ratesheet"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ratesheet"));
}

#[test]
fn test_invalid_date_argument() {
    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.args(["run", "--date", "15.01.2024"]).assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// RUN
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_run_updates_workbook() {
    let (_dir, path) = fixture();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--file")
        .arg(&path)
        .args(["--date", "2024-01-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priced 2 rows"))
        .stdout(predicate::str::contains("Saved"));

    let workbook = Workbook::load(&path).unwrap();
    let sheet = workbook.sheet("Price2").unwrap();
    assert_eq!(sheet.get_value(2, 2), &CellValue::from("2024-01-16"));
    assert_eq!(sheet.get_value(7, 12), &CellValue::Number(980.0));
    assert_eq!(sheet.get_value(7, 13), &CellValue::Number(1000.0));
    assert_eq!(sheet.get_value(8, 12), &CellValue::Number(450.0));
    assert_eq!(sheet.get_value(8, 13), &CellValue::Number(460.0));
}

#[test]
fn test_run_twice_same_result() {
    let (_dir, path) = fixture();

    for _ in 0..2 {
        let mut cmd = Command::cargo_bin("ratesheet").unwrap();
        cmd.arg("run")
            .arg("-f")
            .arg(&path)
            .args(["-d", "2024-01-15"])
            .assert()
            .success();
    }

    let workbook = Workbook::load(&path).unwrap();
    let sheet = workbook.sheet("Price2").unwrap();
    assert_eq!(sheet.get_value(3, 4), &CellValue::Number(89.5));
    assert_eq!(sheet.get_value(7, 12), &CellValue::Number(977.5));
}

#[test]
fn test_run_dry_run_leaves_file() {
    let (_dir, path) = fixture();
    let before = std::fs::read(&path).unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--file")
        .arg(&path)
        .args(["--date", "2024-01-15", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run complete"));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_run_date_not_found() {
    let (_dir, path) = fixture();
    let before = std::fs::read(&path).unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--file")
        .arg(&path)
        .args(["--date", "2030-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exchange rates found for 2030-01-01"))
        .stderr(predicate::str::contains("No exchange rates found for 2030-01-01"));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_run_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--file")
        .arg(temp_dir.path().join("nope.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open workbook"));
}

#[test]
fn test_default_command_uses_default_path() {
    let temp_dir = TempDir::new().unwrap();

    // No Pricess2.xlsx in the working directory
    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pricess2.xlsx"));
}

#[test]
fn test_run_with_layout_file() {
    let (dir, path) = fixture();
    let layout_path = dir.path().join("layout.yaml");
    std::fs::write(
        &layout_path,
        format!(
            "file: {}\nprices:\n  result_column: 15\n  deferred_result_column: 16\n",
            path.display()
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--layout")
        .arg(&layout_path)
        .args(["--date", "2024-01-16"])
        .assert()
        .success();

    let workbook = Workbook::load(&path).unwrap();
    let sheet = workbook.sheet("Price2").unwrap();
    assert_eq!(sheet.get_value(7, 12), &CellValue::Empty);
    assert_eq!(sheet.get_value(7, 15), &CellValue::Number(980.0));
    assert_eq!(sheet.get_value(7, 16), &CellValue::Number(1000.0));
}

#[test]
fn test_run_missing_sheet() {
    let (dir, path) = fixture();
    let layout_path = dir.path().join("layout.yaml");
    std::fs::write(&layout_path, "prices:\n  sheet: Price9\n").unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--file")
        .arg(&path)
        .arg("--layout")
        .arg(&layout_path)
        .args(["--date", "2024-01-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Worksheet not found: Price9"));
}

#[test]
fn test_run_zero_coordinate_layout() {
    let (dir, path) = fixture();
    let before = std::fs::read(&path).unwrap();
    let layout_path = dir.path().join("layout.yaml");
    std::fs::write(&layout_path, "record:\n  date: { row: 0, column: 0 }\n").unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("run")
        .arg("--file")
        .arg(&path)
        .arg("--layout")
        .arg(&layout_path)
        .args(["--date", "2024-01-16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout"));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

// ═══════════════════════════════════════════════════════════════════════════
// LOOKUP
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_lookup_prints_rates() {
    let (_dir, path) = fixture();
    let before = std::fs::read(&path).unwrap();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("lookup")
        .arg("--file")
        .arg(&path)
        .args(["--date", "2024-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exchange rates for 2024-01-17"))
        .stdout(predicate::str::contains("90.5"))
        .stdout(predicate::str::contains("100.5"));

    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_lookup_not_found() {
    let (_dir, path) = fixture();

    let mut cmd = Command::cargo_bin("ratesheet").unwrap();
    cmd.arg("lookup")
        .arg("--file")
        .arg(&path)
        .args(["--date", "1999-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No exchange rates found"));
}

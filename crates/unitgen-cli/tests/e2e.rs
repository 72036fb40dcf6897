//! End-to-end tests for unitgen CLI commands.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Helpers
// =============================================================================

fn unitgen() -> Command {
    Command::cargo_bin("unitgen").expect("Failed to find unitgen binary")
}

fn root_arg(dir: &Path) -> String {
    dir.to_str().expect("temp path is UTF-8").to_string()
}

fn count_files(dir: &Path) -> usize {
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            if path.is_dir() { count_files(&path) } else { 1 }
        })
        .sum()
}

// =============================================================================
// unitgen generate
// =============================================================================

#[test]
fn test_generate_writes_units_and_aggregate() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    unitgen()
        .args(["generate", "1", "2", "3", "--no-sync", "--root", &root_arg(temp.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 written"));

    assert_eq!(count_files(temp.path()), 4);
    for id in 1..=3 {
        assert!(temp.path().join(format!("src/bin/day{}/main.rs", id)).is_file());
    }
    assert!(temp.path().join("src/main.rs").is_file());
}

#[test]
fn test_generate_accepts_ranges() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    unitgen()
        .args(["generate", "1-4", "7", "--root", &root_arg(temp.path())])
        .assert()
        .success();

    assert_eq!(count_files(temp.path()), 6);
}

#[test]
fn test_generate_rejects_duplicates() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    unitgen()
        .args(["generate", "1", "1", "--root", &root_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate unit id: 1"));

    assert_eq!(count_files(temp.path()), 0);
}

#[test]
fn test_generate_failure_closes_progress_line() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = unitgen()
        .args(["generate", "4", "4", "--root", &root_arg(temp.path())])
        .output()
        .expect("Failed to run unitgen");

    assert!(!output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with('\n'), "progress line left open: {:?}", stdout);
    assert!(stdout.contains('✗'));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr: {:?}", stderr);
    assert!(stderr.contains("duplicate unit id: 4"));
    assert!(stderr.contains("(hint: "));
}

#[test]
fn test_generate_rejects_overlapping_range() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    unitgen()
        .args(["generate", "1-3", "2", "--root", &root_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate unit id: 2"));
}

#[test]
fn test_generate_rejects_bad_id() {
    unitgen()
        .args(["generate", "day1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid unit id 'day1'"));
}

#[test]
fn test_generate_without_ids_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    unitgen()
        .args(["generate", "--root", &root_arg(temp.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no unit ids given"));
}

#[test]
fn test_generate_twice_is_identical() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = root_arg(temp.path());

    unitgen().args(["generate", "2", "1", "--root", &root]).assert().success();
    let first = fs::read(temp.path().join("src/main.rs")).unwrap();

    unitgen()
        .args(["generate", "2", "1", "--root", &root])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 changed"));
    let second = fs::read(temp.path().join("src/main.rs")).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// unitgen plan / render
// =============================================================================

#[test]
fn test_plan_lists_paths_in_write_order() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let output = unitgen()
        .args(["plan", "3", "1", "--root", &root_arg(temp.path())])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("src/bin/day3/main.rs"));
    assert!(lines[1].ends_with("src/bin/day1/main.rs"));
    assert!(lines[2].ends_with("src/main.rs"));
    assert_eq!(count_files(temp.path()), 0);
}

#[test]
fn test_render_single_prints_source() {
    unitgen()
        .args(["render", "single", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unit::new(7, unit::solve)"))
        .stdout(predicate::str::contains("unitgen_runtime::single_main"));
}

#[test]
fn test_render_single_needs_one_id() {
    unitgen()
        .args(["render", "single", "1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly one unit id"));
}

#[test]
fn test_render_aggregate_keeps_order() {
    let output = unitgen()
        .args(["render", "aggregate", "3", "1", "2"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let three = stdout.find("Unit::new(3,").unwrap();
    let one = stdout.find("Unit::new(1,").unwrap();
    let two = stdout.find("Unit::new(2,").unwrap();
    assert!(three < one && one < two);
}

// =============================================================================
// unitgen new
// =============================================================================

#[test]
fn test_new_scaffolds_once() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = root_arg(temp.path());

    unitgen()
        .args(["new", "4", "--root", &root])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new unit"));

    let stub = fs::read_to_string(temp.path().join("src/day4.rs")).unwrap();
    assert!(stub.contains("pub fn solve(input: &str) -> UnitResult"));

    unitgen()
        .args(["new", "4", "--root", &root])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

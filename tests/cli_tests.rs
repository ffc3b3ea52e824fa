//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn consolekit() -> Command {
    Command::cargo_bin("consolekit").unwrap()
}

#[test]
fn test_missing_required_options() {
    consolekit()
        .args(["-nologfile", "-RequiredParam2", "two"])
        .assert()
        .failure()
        .code(2) // Missing required options
        .stdout(predicate::str::contains(
            "ERROR - Missing these required options: RequiredParam1",
        ))
        .stdout(predicate::str::contains("two").not());
}

#[test]
fn test_all_required_missing_are_listed() {
    consolekit()
        .arg("-nologfile")
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Missing these required options: RequiredParam1, RequiredParam2",
        ));
}

#[test]
fn test_reports_required_values() {
    consolekit()
        .args(["-nologfile", "-requiredparam1", "one", "-REQUIREDPARAM2", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO  - one"))
        .stdout(predicate::str::contains("WARN  - two"))
        .stdout(predicate::str::contains("ERROR").not());
}

#[test]
fn test_main_argument_is_logged_as_error() {
    consolekit()
        .args(["Target", "-nologfile", "-RequiredParam1", "one", "-RequiredParam2", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR - target"));
}

#[test]
fn test_switch_with_optional_value() {
    consolekit()
        .args([
            "-nologfile",
            "-RequiredParam1",
            "one",
            "-RequiredParam2",
            "two",
            "-Switch",
            "-OptionalParam",
            "extra",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRIT  - extra"));
}

#[test]
fn test_switch_without_optional_value() {
    consolekit()
        .args(["-nologfile", "-RequiredParam1", "one", "-RequiredParam2", "two", "-Switch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO  - No optional value supplied!"));
}

#[test]
fn test_empty_argument_is_rejected() {
    consolekit()
        .args(["-nologfile", ""])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid argument #2"));
}

#[test]
fn test_dump_prints_json() {
    let output = consolekit()
        .args(["Main", "-dump", "-Level", "3"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"__main__": "main", "dump": true, "level": "3"})
    );
}

#[test]
fn test_strict_mode_drops_main_argument() {
    let output = consolekit()
        .args(["Main", "-strict", "-dump"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!({"dump": true, "strict": true}));
}

#[test]
fn test_log_file_in_custom_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    consolekit()
        .arg("-logdir")
        .arg(&log_dir)
        .args(["-noconsole", "-RequiredParam1", "one", "-RequiredParam2", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFO").not());

    let entries: Vec<_> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);

    let file_name = entries[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("Log"));
    assert!(file_name.ends_with(".txt"));

    let contents = fs::read_to_string(&entries[0]).unwrap();
    assert!(contents.contains(" - INFO  - one\n"));
    assert!(contents.contains(" - WARN  - two\n"));
}

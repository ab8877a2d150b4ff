use crate::support::{
    casebook, setup_laptop_store, setup_laptop_store_with_cases, stdout_json, table, CASES,
};
use predicates::prelude::*;
use std::fs;

// ============================================================================
// Retain command tests
// ============================================================================

#[test]
fn test_retain_appends_next_case() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["retain", "-d", "laptop", "--resolution", "S02", "G01", "G03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retained case K03 in laptop"));

    let content = fs::read_to_string(table(dir.path(), "laptop", "cases.csv")).unwrap();
    assert!(content.starts_with(CASES));
    assert!(content.ends_with("K03,\"G01,G03\",S02\n"));
}

#[test]
fn test_retain_quiet_prints_only_id() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["--quiet", "retain", "-d", "laptop", "-r", "S01", "G02"])
        .assert()
        .success()
        .stdout("K03\n");
}

#[test]
fn test_retained_case_scores_100() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["retain", "-d", "laptop", "-r", "S01", "G02", "G03"])
        .assert()
        .success();

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "diagnose", "-d", "laptop", "G02", "G03"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["diagnosis"]["case_id"], "K03");
    assert_eq!(json["diagnosis"]["similarity"].as_f64(), Some(100.0));
}

#[test]
fn test_retain_json_output() {
    let dir = setup_laptop_store();

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "retain", "-d", "laptop", "-r", "S01", "G01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["case_id"], "K03");
    assert_eq!(json["signature"][0], "G01");
}

#[test]
fn test_retain_fallback_id() {
    let dir = setup_laptop_store_with_cases("case_id,signature,resolution_id\nCASE-X,G01,S01\n");

    casebook()
        .current_dir(dir.path())
        .args(["--quiet", "retain", "-d", "laptop", "-r", "S01", "G01"])
        .assert()
        .success()
        .stdout("K99\n");
}

#[test]
fn test_retain_unknown_resolution() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["retain", "-d", "laptop", "-r", "S42", "G01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("S42"));

    let content = fs::read_to_string(table(dir.path(), "laptop", "cases.csv")).unwrap();
    assert_eq!(content, CASES);
}

#[test]
fn test_retain_while_locked() {
    let dir = setup_laptop_store();
    let lock = table(dir.path(), "laptop", "cases.csv.lock");
    fs::write(&lock, "1\n").unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "retain", "-d", "laptop", "-r", "S01", "G01"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("store_locked"));

    let content = fs::read_to_string(table(dir.path(), "laptop", "cases.csv")).unwrap();
    assert_eq!(content, CASES);
    assert!(lock.exists());
}

#[test]
fn test_retain_requires_symptoms() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["retain", "-d", "laptop", "-r", "S01"])
        .assert()
        .code(2);
}

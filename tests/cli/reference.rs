use crate::support::{casebook, setup_laptop_store, stdout_json, table};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_symptoms_human() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["symptoms", "-d", "laptop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G01"))
        .stdout(predicate::str::contains("Will not power on"));
}

#[test]
fn test_symptoms_json() {
    let dir = setup_laptop_store();

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "symptoms", "--domain", "laptop"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["symptom_id"], "G01");
    assert_eq!(json[0]["weight"], 5);
}

#[test]
fn test_resolutions_records() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "records", "resolutions", "-d", "laptop"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=resolutions domain=laptop count=2"))
        .stdout(predicate::str::contains("S S01 \"Replace the battery\""));
}

#[test]
fn test_unknown_domain() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["symptoms", "-d", "printer"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown domain: printer"));
}

#[test]
fn test_missing_table_is_data_error() {
    let dir = setup_laptop_store();
    fs::remove_file(table(dir.path(), "laptop", "symptoms.csv")).unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "symptoms", "-d", "laptop"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("resource_not_found"));
}

use crate::support::{casebook, stdout_json, table};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn init_store() -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    casebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

#[test]
fn test_domain_add_creates_tables() {
    let dir = init_store();

    casebook()
        .current_dir(dir.path())
        .args([
            "domain",
            "add",
            "chili",
            "--prefix",
            "KC",
            "--display-name",
            "Chili Plant",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added domain chili"));

    let cases = fs::read_to_string(table(dir.path(), "chili", "cases.csv")).unwrap();
    assert_eq!(cases.trim_end(), "case_id,signature,resolution_id");
    let symptoms = fs::read_to_string(table(dir.path(), "chili", "symptoms.csv")).unwrap();
    assert_eq!(symptoms.trim_end(), "symptom_id,display_name,weight");
    assert!(table(dir.path(), "chili", "resolutions.csv").exists());

    let config = fs::read_to_string(dir.path().join(".casebook/config.toml")).unwrap();
    let config: toml::Value = toml::from_str(&config).unwrap();
    assert_eq!(config["domains"]["chili"]["id_prefix"].as_str(), Some("KC"));
    assert_eq!(
        config["domains"]["chili"]["display_name"].as_str(),
        Some("Chili Plant")
    );
    assert_eq!(
        config["domains"]["chili"]["fallback_suffix"].as_str(),
        Some("99")
    );
}

#[test]
fn test_domain_add_twice_fails() {
    let dir = init_store();

    casebook()
        .current_dir(dir.path())
        .args(["domain", "add", "laptop", "--prefix", "K"])
        .assert()
        .success();

    casebook()
        .current_dir(dir.path())
        .args(["domain", "add", "laptop", "--prefix", "K"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_domain_add_rejects_empty_fallback_suffix() {
    let dir = init_store();

    casebook()
        .current_dir(dir.path())
        .args([
            "domain",
            "add",
            "laptop",
            "--prefix",
            "K",
            "--fallback-suffix",
            "",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fallback suffix"));

    assert!(!table(dir.path(), "laptop", "cases.csv").exists());
}

#[test]
fn test_domain_add_rejects_digit_prefix() {
    let dir = init_store();

    casebook()
        .current_dir(dir.path())
        .args(["domain", "add", "laptop", "--prefix", "K1"])
        .assert()
        .code(2);
}

#[test]
fn test_domain_list() {
    let dir = init_store();

    casebook()
        .current_dir(dir.path())
        .args(["domain", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No domains configured"));

    for (name, prefix) in [("laptop", "K"), ("chili", "KC")] {
        casebook()
            .current_dir(dir.path())
            .args(["domain", "add", name, "--prefix", prefix])
            .assert()
            .success();
    }

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "domain", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["chili", "laptop"]);
}

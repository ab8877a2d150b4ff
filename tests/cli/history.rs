use crate::support::{
    casebook, setup_laptop_store, setup_laptop_store_with_cases, stdout_json, store_root,
};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_history_empty() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No diagnoses logged"));
}

#[test]
fn test_diagnose_without_log_writes_nothing() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "G01"])
        .assert()
        .success();

    assert!(!store_root(dir.path()).join("history.csv").exists());
}

#[test]
fn test_diagnose_log_appends_history() {
    let dir = setup_laptop_store();

    for symptoms in [["G01", "G02"], ["G03", "G02"]] {
        casebook()
            .current_dir(dir.path())
            .args(["diagnose", "-d", "laptop", "--log"])
            .args(symptoms)
            .assert()
            .success();
    }

    let content = fs::read_to_string(store_root(dir.path()).join("history.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "timestamp,domain,symptoms,resolution,score");
    assert!(lines[1].contains(",laptop,\"G01,G02\",Replace the battery,100"));

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "history", "-d", "laptop", "--limit", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["symptoms"][0], "G03");
    assert_eq!(entries[0]["resolution"], "Clean the fan");
}

#[test]
fn test_auto_log_from_config() {
    let dir = setup_laptop_store();
    let config_path = store_root(dir.path()).join("config.toml");
    let config = fs::read_to_string(&config_path).unwrap();
    fs::write(
        &config_path,
        config.replace("auto_log = false", "auto_log = true"),
    )
    .unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "G01"])
        .assert()
        .success();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "records", "history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entries=1"))
        .stdout(predicate::str::contains("domain=laptop"))
        .stdout(predicate::str::contains("resolution=\"Replace the battery\""));
}

#[test]
fn test_history_unknown_domain() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["history", "-d", "printer"])
        .assert()
        .code(3);
}

#[test]
fn test_history_logs_id_for_unlisted_resolution() {
    let cases = "case_id,signature,resolution_id\n\
                 K01,G01,S07\n";
    let dir = setup_laptop_store_with_cases(cases);

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "--log", "G01"])
        .assert()
        .success();

    let content = fs::read_to_string(store_root(dir.path()).join("history.csv")).unwrap();
    assert!(content.contains(",laptop,G01,S07,100"));
}

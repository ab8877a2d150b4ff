use crate::support::casebook;
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Init command tests
// ============================================================================

#[test]
fn test_init_creates_store() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized casebook store"));

    assert!(dir.path().join(".casebook").exists());
    assert!(dir.path().join(".casebook/domains").exists());
    assert!(dir.path().join(".casebook/config.toml").exists());
}

#[test]
fn test_init_idempotent() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    casebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
}

#[test]
fn test_init_visible() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["init", "--visible"])
        .assert()
        .success();

    assert!(dir.path().join("casebook").exists());
    assert!(!dir.path().join(".casebook").exists());
}

#[test]
fn test_init_explicit_store_path() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["--store", "data/kb", "init"])
        .assert()
        .success();

    assert!(dir.path().join("data/kb/config.toml").exists());
}

#[test]
fn test_init_json_output() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"ok\""));
}

#[test]
fn test_init_records_output() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "records", "init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H casebook=1 records=1"))
        .stdout(predicate::str::contains("mode=init status=ok"));
}

#[test]
fn test_default_config_contents() {
    let dir = tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join(".casebook/config.toml")).unwrap();
    let config: toml::Value = toml::from_str(&content).unwrap();
    assert_eq!(config["version"].as_integer(), Some(1));
    assert_eq!(
        config["diagnosis"]["confirmed_threshold"].as_float(),
        Some(80.0)
    );
    assert_eq!(config["history"]["auto_log"].as_bool(), Some(false));
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for casebook
pub fn casebook() -> Command {
    cargo_bin_cmd!("casebook")
}

pub const SYMPTOMS: &str = "symptom_id,display_name,weight\n\
                            G01,Will not power on,5\n\
                            G02,Battery drains fast,3\n\
                            G03,Fan is loud,2\n";

pub const RESOLUTIONS: &str = "resolution_id,display_name\n\
                               S01,Replace the battery\n\
                               S02,Clean the fan\n";

pub const CASES: &str = "case_id,signature,resolution_id\n\
                         K01,\"G01,G02\",S01\n\
                         K02,G03,S02\n";

/// Store root of a project directory set up with the default layout
pub fn store_root(dir: &Path) -> PathBuf {
    dir.join(".casebook")
}

/// Path of a domain table file
pub fn table(dir: &Path, domain: &str, file: &str) -> PathBuf {
    store_root(dir).join("domains").join(domain).join(file)
}

/// Initialize a store and register the `laptop` domain with fixture tables
pub fn setup_laptop_store() -> TempDir {
    setup_laptop_store_with_cases(CASES)
}

pub fn setup_laptop_store_with_cases(cases: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();

    casebook()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    casebook()
        .current_dir(dir.path())
        .args(["domain", "add", "laptop", "--prefix", "K"])
        .assert()
        .success();

    fs::write(table(dir.path(), "laptop", "symptoms.csv"), SYMPTOMS).unwrap();
    fs::write(table(dir.path(), "laptop", "resolutions.csv"), RESOLUTIONS).unwrap();
    fs::write(table(dir.path(), "laptop", "cases.csv"), cases).unwrap();

    dir
}

/// Parse stdout of a successful command as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

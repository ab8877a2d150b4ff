use crate::support::{casebook, setup_laptop_store, setup_laptop_store_with_cases, stdout_json};
use predicates::prelude::*;

// ============================================================================
// Diagnose command tests
// ============================================================================

#[test]
fn test_diagnose_exact_match_is_confirmed() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "G01", "G02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolution found (confirmed, 100.0%)"))
        .stdout(predicate::str::contains("S01  Replace the battery"));
}

#[test]
fn test_diagnose_partial_match_similarity() {
    let dir = setup_laptop_store();

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "diagnose", "-d", "laptop", "G01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let similarity = json["diagnosis"]["similarity"].as_f64().unwrap();
    assert!((similarity - 76.923).abs() < 0.001);
    assert_eq!(json["diagnosis"]["case_id"], "K01");
    assert_eq!(json["diagnosis"]["confidence"], "probable");
    assert_eq!(json["cases"], 2);

    let ranked = json["ranked"].as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[1]["case_id"], "K02");
    assert_eq!(ranked[1]["similarity"].as_f64(), Some(0.0));
}

#[test]
fn test_diagnose_top_limits_ranked_cases() {
    let dir = setup_laptop_store();

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "diagnose", "-d", "laptop", "--top", "1", "G03"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["ranked"].as_array().unwrap().len(), 1);
    assert_eq!(json["diagnosis"]["resolution_id"], "S02");
}

#[test]
fn test_diagnose_unknown_symptom_warns() {
    let dir = setup_laptop_store();

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "diagnose", "-d", "laptop", "G01", "G99"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["unknown_symptoms"][0], "G99");
    // Unknown ids weigh nothing, so this still scores like `G01` alone
    let similarity = json["diagnosis"]["similarity"].as_f64().unwrap();
    assert!((similarity - 76.923).abs() < 0.001);
}

#[test]
fn test_diagnose_noise_lowers_score() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "records", "diagnose", "-d", "laptop", "G01", "G02", "G03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D case=K01 similarity=88.889 confidence=confirmed"));
}

#[test]
fn test_diagnose_records_output() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["--format", "records", "diagnose", "-d", "laptop", "G03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=diagnose domain=laptop observed=G03 cases=2"))
        .stdout(predicate::str::contains(
            "D case=K02 similarity=100.000 confidence=confirmed resolution=S02 text=\"Clean the fan\"",
        ))
        .stdout(predicate::str::contains("R 1 case=K02"))
        .stdout(predicate::str::contains("R 2 case=K01 similarity=0.000"));
}

#[test]
fn test_diagnose_empty_case_base_is_data_error() {
    let dir = setup_laptop_store_with_cases("case_id,signature,resolution_id\n");

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "G01"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no usable cases"));
}

#[test]
fn test_diagnose_skips_malformed_rows() {
    let cases = "case_id,signature,resolution_id\n\
                 ,G01,S02\n\
                 K02,G01,S01\n";
    let dir = setup_laptop_store_with_cases(cases);

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "diagnose", "-d", "laptop", "G01"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["cases"], 1);
    assert_eq!(json["diagnosis"]["case_id"], "K02");
}

#[test]
fn test_diagnose_unknown_resolution_has_no_text() {
    let dir = setup_laptop_store_with_cases("case_id,signature,resolution_id\nK01,G01,S77\n");

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "G01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("S77  (not listed in the laptop resolutions table)"));
}

#[test]
fn test_diagnose_unrelated_symptoms_unrecognized() {
    let dir = setup_laptop_store_with_cases("case_id,signature,resolution_id\nK01,G01,S01\n");

    casebook()
        .current_dir(dir.path())
        .args(["diagnose", "-d", "laptop", "G02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unrecognized case"));
}

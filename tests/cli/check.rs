use crate::support::{casebook, setup_laptop_store, setup_laptop_store_with_cases, stdout_json};
use predicates::prelude::*;

#[test]
fn test_check_clean_domain() {
    let dir = setup_laptop_store();

    casebook()
        .current_dir(dir.path())
        .args(["check", "-d", "laptop", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 symptoms, 2 resolutions, 2 cases"))
        .stdout(predicate::str::contains("No problems found"));
}

#[test]
fn test_check_reports_dropped_and_dangling() {
    let cases = "case_id,signature,resolution_id\n\
                 K01,\"G01,G77\",S01\n\
                 K02,G02,\n\
                 K03,G03,S09\n";
    let dir = setup_laptop_store_with_cases(cases);

    let output = casebook()
        .current_dir(dir.path())
        .args(["--format", "json", "check", "-d", "laptop"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["cases"], 2);

    let dropped = json["dropped_rows"].as_array().unwrap();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0]["table"], "cases");
    assert_eq!(dropped[0]["line"], 3);

    let dangling = json["dangling_references"].as_array().unwrap();
    assert_eq!(dangling.len(), 2);
    assert_eq!(dangling[0]["missing_id"], "G77");
    assert_eq!(dangling[1]["missing_id"], "S09");
}

#[test]
fn test_check_strict_fails_on_problems() {
    let dir = setup_laptop_store_with_cases("case_id,signature,resolution_id\nK01,G01,S09\n");

    casebook()
        .current_dir(dir.path())
        .args(["check", "-d", "laptop", "--strict"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("references unknown resolutions id S09"));
}

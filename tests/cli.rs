use assert_cmd::Command;
use predicates::prelude::*;

fn chschema() -> Command {
    Command::cargo_bin("chschema").expect("binary should be built")
}

#[test]
fn test_missing_url_prints_usage_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    chschema()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--file"));

    assert!(!dir.path().join("schema.sql").exists());
}

#[test]
fn test_empty_url_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    chschema()
        .current_dir(dir.path())
        .args(["--url", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));

    assert!(!dir.path().join("schema.sql").exists());
}

#[test]
fn test_help_flag() {
    chschema()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("schema.sql"));
}

#[test]
fn test_rejects_unknown_format() {
    chschema()
        .args(["--url", "mysql://localhost:9004/default", "--format", "xml"])
        .assert()
        .failure();
}

#[test]
fn test_single_dash_empty_url_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    chschema()
        .current_dir(dir.path())
        .args(["-url", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));

    assert!(!dir.path().join("schema.sql").exists());
}

#[test]
fn test_single_dash_flags_reach_connection_step() {
    let dir = tempfile::tempdir().unwrap();
    chschema()
        .current_dir(dir.path())
        .args(["-url", "not-a-url", "-file", "out.sql"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parsing clickhouse url"))
        .stderr(predicate::str::contains("unexpected argument").not());

    assert!(!dir.path().join("out.sql").exists());
}

#[test]
fn test_single_dash_help() {
    chschema()
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Output format"));
}

use crate::cli::support::{shoprec, TestEnv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_no_command_prints_version() {
    let env = TestEnv::new();

    shoprec(&env)
        .assert()
        .success()
        .stdout(predicate::str::contains("shoprec "));
}

#[test]
fn test_json_usage_error_envelope() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--format", "json", "behavior"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"usage_error\""));
}

#[test]
fn test_quiet_suppresses_error_text() {
    let env = TestEnv::new();
    fs::remove_file(&env.catalog).unwrap();

    shoprec(&env)
        .args(["--quiet", "categories"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_config_file_sets_default_count() {
    let env = TestEnv::new();
    let config_dir = env.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("shoprec.toml"), "default_count = 2\n").unwrap();

    let output = shoprec(&env)
        .args(["content", "Trail Shoes"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 2);
}

#[test]
fn test_invalid_config_is_reported() {
    let env = TestEnv::new();
    let config_dir = env.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("shoprec.toml"), "max_features = 0\n").unwrap();

    shoprec(&env)
        .arg("categories")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid max_features"));
}

#[test]
fn test_blank_user_is_usage_error() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["count", "--user", "  "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--user must not be empty"));
}

#[test]
fn test_help_with_json_format_is_not_an_error() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--format", "json", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: shoprec"));
}

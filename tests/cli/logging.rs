use crate::cli::support::{shoprec, TestEnv};
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--log-level", "debug", "categories"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--log-level", "warn", "categories"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--verbose", "content", "Trail Shoes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("similarity index built"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--log-json", "--log-level", "debug", "categories"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

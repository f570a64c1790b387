use crate::cli::support::{shoprec, stdout_json, TestEnv};
use predicates::prelude::*;

#[test]
fn test_log_and_count() {
    let env = TestEnv::new();

    for _ in 0..3 {
        shoprec(&env)
            .args(["log", "--user", "u1", "--product-id", "7", "--type", "view"])
            .assert()
            .success();
    }

    shoprec(&env)
        .args(["count", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3\n"));

    shoprec(&env)
        .args(["count", "--user", "someone-else"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn test_log_writes_expected_row() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["log", "--user", "u1", "--product-id", "2", "--type", "add-to-cart"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&env.db).unwrap();
    let (name, kind): (String, String) = conn
        .query_row(
            "SELECT product_name, interaction_type FROM user_interactions WHERE user_id = 'u1'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(name, "Road Shoes");
    assert_eq!(kind, "add_to_cart");
}

#[test]
fn test_log_rejects_unknown_type() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["log", "--user", "u1", "--product-id", "2", "--type", "purchase"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid interaction type"));
}

#[test]
fn test_log_unknown_product_is_data_error() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["--format", "json", "log", "--user", "u1", "--product-id", "404"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"product_not_found\""));
}

#[test]
fn test_history_orders_by_frequency() {
    let env = TestEnv::new();

    let log = |id: &str| {
        shoprec(&env)
            .args(["log", "--user", "u1", "--product-id", id])
            .assert()
            .success();
    };
    log("1");
    log("6");
    log("6");

    let output = shoprec(&env)
        .args(["--format", "json", "history", "--user", "u1"])
        .output()
        .unwrap();
    let history = stdout_json(&output);
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["product_name"], "Smartphone");
    assert_eq!(history[0]["count"], 2);
    assert_eq!(history[1]["product_id"], 1);
}

#[test]
fn test_activity_summary() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["log", "--user", "u1", "--product-id", "3"])
        .assert()
        .success();
    shoprec(&env)
        .args(["log", "--user", "u1", "--product-id", "3", "--type", "cart"])
        .assert()
        .success();

    shoprec(&env)
        .args(["activity", "--user", "u1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 views, 1 add to cart"))
        .stdout(predicate::str::contains("Hiking Boots"));

    let output = shoprec(&env)
        .args(["--format", "json", "activity", "--user", "u1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["summary"]["views"], 1);
    assert_eq!(json["activity"].as_array().unwrap().len(), 2);
}

#[test]
fn test_history_without_catalog_still_works() {
    let env = TestEnv::new();
    std::fs::remove_file(&env.catalog).unwrap();

    shoprec(&env)
        .args(["history", "--user", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No history for nobody"));
}

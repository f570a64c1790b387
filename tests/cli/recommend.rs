use crate::cli::support::{shoprec, stdout_json, TestEnv};
use predicates::prelude::*;

// ============================================================================
// Content recommendations
// ============================================================================

#[test]
fn test_content_ranks_similar_products_first() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["content", "Trail Shoes", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Shoes"))
        .stdout(predicate::str::contains("Laptop").not());
}

#[test]
fn test_content_json_excludes_query_product() {
    let env = TestEnv::new();

    let output = shoprec(&env)
        .args(["--format", "json", "content", "Laptop Pro", "-n", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let recs = stdout_json(&output);
    let recs = recs.as_array().unwrap();
    assert_eq!(recs.len(), 6);
    assert_eq!(recs[0]["product"]["name"], "Desktop Tower");
    assert!(recs.iter().all(|r| r["product"]["id"] != 4));

    let scores: Vec<f64> = recs.iter().map(|r| r["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_content_unknown_product_is_not_an_error() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["content", "Flux Capacitor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No recommendations"));

    shoprec(&env)
        .args(["--format", "json", "content", "Flux Capacitor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

// ============================================================================
// Behavior and hybrid recommendations
// ============================================================================

#[test]
fn test_behavior_new_user_gets_distinct_products() {
    let env = TestEnv::new();

    let output = shoprec(&env)
        .args(["--format", "json", "--seed", "3", "behavior", "--user", "new", "-n", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let recs = stdout_json(&output);
    let mut ids: Vec<i64> = recs
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 4);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn test_behavior_follows_logged_category() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["log", "--user", "alice", "--product-id", "4"])
        .assert()
        .success();

    let output = shoprec(&env)
        .args(["--format", "json", "behavior", "--user", "alice", "-n", "2"])
        .output()
        .unwrap();
    let recs = stdout_json(&output);
    for product in recs.as_array().unwrap() {
        assert_eq!(product["category"], "Electronics");
        assert_ne!(product["id"], 4);
    }
}

#[test]
fn test_seed_makes_behavior_reproducible() {
    let env = TestEnv::new();
    let run = || {
        shoprec(&env)
            .args(["--format", "json", "--seed", "42", "behavior", "--user", "bob"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_hybrid_tags_sources() {
    let env = TestEnv::new();

    let output = shoprec(&env)
        .args([
            "--format", "json", "hybrid", "--user", "carol", "Trail Shoes", "-n", "4",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items = stdout_json(&output);
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["source"], "content");
    assert_eq!(items[1]["source"], "content");
    assert!(items[0]["score"].is_number());
    assert_eq!(items[2]["source"], "behavior");
    assert!(items[3]["score"].is_null());
}

#[test]
fn test_hybrid_human_output() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["hybrid", "--user", "carol", "Trail Shoes", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[content]"))
        .stdout(predicate::str::contains("[behavior]"));
}

#[test]
fn test_content_served_when_store_cannot_open() {
    let mut env = TestEnv::new();
    let blocker = env.path().join("not_a_dir");
    std::fs::write(&blocker, b"plain file").unwrap();
    env.db = blocker.join("user_behavior.db");

    shoprec(&env)
        .args(["content", "Trail Shoes", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Shoes"));

    shoprec(&env)
        .args(["--format", "json", "log", "--user", "u1", "--product-id", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"store_unavailable\""));
}

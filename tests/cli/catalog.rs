use crate::cli::support::{shoprec, stdout_json, TestEnv};
use predicates::prelude::*;

#[test]
fn test_categories_in_first_appearance_order() {
    let env = TestEnv::new();

    let output = shoprec(&env)
        .args(["--format", "json", "categories"])
        .output()
        .unwrap();
    assert_eq!(
        stdout_json(&output),
        serde_json::json!(["Footwear", "Electronics", "Kitchen"])
    );

    shoprec(&env)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Footwear (3)"));
}

#[test]
fn test_products_filtered_by_category() {
    let env = TestEnv::new();

    shoprec(&env)
        .args(["products", "--category", "Kitchen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[7] Coffee Mug (Kitchen) $12.50"))
        .stdout(predicate::str::contains("Laptop").not());
}

#[test]
fn test_missing_catalog_is_fatal() {
    let env = TestEnv::new();
    std::fs::remove_file(&env.catalog).unwrap();

    shoprec(&env)
        .args(["content", "Trail Shoes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("catalog unavailable"));
}

#[test]
fn test_empty_catalog_halts_recommendations() {
    let env = TestEnv::with_catalog("id,name,category,description,price,image_url\n");

    shoprec(&env)
        .args(["--format", "json", "behavior", "--user", "u1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"empty_catalog\""));
}

#[test]
fn test_malformed_catalog_reports_row() {
    let env = TestEnv::with_catalog(
        "id,name,category,description,price,image_url\n1,Mug,Kitchen,mug,cheap,u\n",
    );

    shoprec(&env)
        .arg("products")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("row 2"));
}

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CATALOG_CSV: &str = "\
id,name,category,description,price,image_url
1,Trail Shoes,Footwear,grippy running shoes for rough trails,89.99,https://img.example.com/1.png
2,Road Shoes,Footwear,cushioned running shoes for pavement,79.99,https://img.example.com/2.png
3,Hiking Boots,Footwear,waterproof leather boots,129.00,https://img.example.com/3.png
4,Laptop Pro,Electronics,fast portable laptop computer,1299.00,https://img.example.com/4.png
5,Desktop Tower,Electronics,powerful desktop computer,999.00,https://img.example.com/5.png
6,Smartphone,Electronics,mobile phone with camera,699.00,https://img.example.com/6.png
7,Coffee Mug,Kitchen,ceramic mug for coffee,12.50,https://img.example.com/7.png
";

/// Get a Command for shoprec, isolated from the user's config directory
pub fn shoprec(env: &TestEnv) -> Command {
    let mut cmd = cargo_bin_cmd!("shoprec");
    cmd.env("SHOPREC_CONFIG_DIR", env.dir.path().join("config"))
        .env_remove("SHOPREC_CATALOG")
        .env_remove("SHOPREC_DB")
        .env_remove("RUST_LOG")
        .env_remove("SHOPREC_LOG")
        .arg("--catalog")
        .arg(&env.catalog)
        .arg("--db")
        .arg(&env.db);
    cmd
}

/// Temporary catalog and interaction database
pub struct TestEnv {
    pub dir: TempDir,
    pub catalog: PathBuf,
    pub db: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_catalog(CATALOG_CSV)
    }

    pub fn with_catalog(csv: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("products.csv");
        fs::write(&catalog, csv).unwrap();
        let db = dir.path().join("user_behavior.db");
        TestEnv { dir, catalog, db }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

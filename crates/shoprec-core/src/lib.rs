//! Shoprec Core Library
//!
//! Recommendation engine for a static product catalog: TF-IDF content
//! similarity, per-user category affinity sampling, and a hybrid of both,
//! backed by an append-only interaction log.

pub mod catalog;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod logging;
pub mod recommend;
pub mod similarity;
pub mod text;

pub use engine::Engine;
pub use error::{Result, ShoprecError};

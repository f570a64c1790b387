//! Recommendation strategies
//!
//! - `content`: ranks products by text similarity to a reference product
//! - `behavior`: samples products from a user's category affinities
//! - `hybrid`: content results followed by behavior results

mod behavior;
mod content;
mod hybrid;

pub use behavior::recommend_behavior;
pub use content::recommend_content;
pub use hybrid::combine;
pub(crate) use hybrid::content_share;

use serde::Serialize;

use crate::catalog::Product;

/// A product with its similarity to the query product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct {
    pub product: Product,
    pub score: f64,
}

/// Strategy that produced a hybrid result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Content,
    Behavior,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Content => "content",
            Source::Behavior => "behavior",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a hybrid recommendation list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HybridItem {
    pub product: Product,
    /// Similarity score, present only for content results
    pub score: Option<f64>,
    pub source: Source,
}

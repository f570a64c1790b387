use crate::catalog::Product;

use super::{HybridItem, ScoredProduct, Source};

/// Number of content results in a hybrid list of `n`
pub(crate) fn content_share(n: usize) -> usize {
    n / 2
}

/// Content results first, then behavior results.
///
/// A product may appear in both halves; no deduplication is done.
pub fn combine(content: Vec<ScoredProduct>, behavior: Vec<Product>) -> Vec<HybridItem> {
    content
        .into_iter()
        .map(|rec| HybridItem {
            product: rec.product,
            score: Some(rec.score),
            source: Source::Content,
        })
        .chain(behavior.into_iter().map(|product| HybridItem {
            product,
            score: None,
            source: Source::Behavior,
        }))
        .collect()
}

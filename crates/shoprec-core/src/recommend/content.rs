use crate::catalog::Catalog;
use crate::similarity::SimilarityIndex;

use super::ScoredProduct;

/// Products most similar to the named product.
///
/// Unknown names yield an empty list. The query product is never included;
/// equal scores keep catalog order.
pub fn recommend_content(
    catalog: &Catalog,
    index: &SimilarityIndex,
    product_name: &str,
    n: usize,
) -> Vec<ScoredProduct> {
    let Some(query) = catalog.index_of_name(product_name) else {
        tracing::debug!(product = product_name, "no such product for content recommendation");
        return Vec::new();
    };
    let Some(row) = index.row(query) else {
        return Vec::new();
    };

    let mut ranked: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(idx, _)| idx != query)
        .collect();
    // Stable sort keeps ascending catalog index among ties
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .filter_map(|(idx, score)| {
            catalog.get(idx).map(|product| ScoredProduct {
                product: product.clone(),
                score,
            })
        })
        .collect()
}

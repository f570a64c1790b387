//! Similarity index over the product catalog
//!
//! Built once from the catalog and shared read-only for the life of the
//! process.

mod matrix;
mod tfidf;

pub use matrix::SimilarityMatrix;
pub use tfidf::{cosine, TermVector, TfidfModel, VectorizerConfig};

use std::time::Instant;

use crate::catalog::Catalog;
use crate::error::{Result, ShoprecError};
use crate::trace_time;

/// TF-IDF vectors plus the derived pairwise similarity matrix
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    model: TfidfModel,
    matrix: SimilarityMatrix,
}

impl SimilarityIndex {
    /// Vectorize the catalog and compute all pairwise similarities.
    ///
    /// Fails with `EmptyCatalog` when there is nothing to index.
    pub fn build(catalog: &Catalog, config: &VectorizerConfig) -> Result<Self> {
        if catalog.is_empty() {
            return Err(ShoprecError::EmptyCatalog);
        }

        let start = Instant::now();
        let model = TfidfModel::fit(catalog.combined_texts(), config);
        trace_time!(start, "fit_tfidf", terms = model.vocabulary().len());

        let start = Instant::now();
        let matrix = SimilarityMatrix::from_vectors(model.vectors());
        trace_time!(start, "build_similarity_matrix", size = matrix.size());

        tracing::debug!(
            products = catalog.len(),
            vocabulary = model.vocabulary().len(),
            "similarity index built"
        );

        Ok(SimilarityIndex { model, matrix })
    }

    /// Number of indexed products
    pub fn len(&self) -> usize {
        self.matrix.size()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.size() == 0
    }

    /// Similarity between two catalog indices
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.matrix.get(i, j)
    }

    /// Similarity of one product to every product, in catalog order
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        self.matrix.row(i)
    }

    pub fn model(&self) -> &TfidfModel {
        &self.model
    }
}

//! TF-IDF vectorization of catalog text
//!
//! Terms are unigrams and bigrams over the stop-word-filtered token stream.
//! The vocabulary keeps the `max_features` terms with the highest corpus-wide
//! count (ties broken alphabetically) and assigns indices in alphabetical
//! order. Weights use raw term counts and smoothed idf,
//! `ln((1 + n) / (1 + df)) + 1`, and every document vector is L2-normalized.

use std::collections::{BTreeMap, HashMap};

use crate::text::{ngrams, tokenize_with_stemming};

/// Sparse document vector: `(term index, weight)` pairs sorted by term index
pub type TermVector = Vec<(usize, f64)>;

/// Vectorizer settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorizerConfig {
    /// Upper bound on vocabulary size
    pub max_features: usize,
    /// Apply Porter stemming before n-gram extraction
    pub stem: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            max_features: 5000,
            stem: false,
        }
    }
}

/// Fitted TF-IDF model over a fixed corpus
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    vectors: Vec<TermVector>,
}

impl TfidfModel {
    /// Fit the vocabulary and weight every document in one pass
    pub fn fit(documents: &[String], config: &VectorizerConfig) -> Self {
        let term_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| ngrams(&tokenize_with_stemming(doc, config.stem), 1, 2))
            .collect();

        let vocabulary = select_vocabulary(&term_lists, config.max_features);
        let lookup: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.as_str(), idx))
            .collect();

        let counts: Vec<BTreeMap<usize, u32>> = term_lists
            .iter()
            .map(|terms| {
                let mut tf = BTreeMap::new();
                for term in terms {
                    if let Some(&idx) = lookup.get(term.as_str()) {
                        *tf.entry(idx).or_insert(0) += 1;
                    }
                }
                tf
            })
            .collect();

        let mut df = vec![0u32; vocabulary.len()];
        for tf in &counts {
            for &idx in tf.keys() {
                df[idx] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let vectors = counts
            .iter()
            .map(|tf| {
                let mut vector: TermVector = tf
                    .iter()
                    .map(|(&idx, &count)| (idx, count as f64 * idf[idx]))
                    .collect();
                normalize(&mut vector);
                vector
            })
            .collect();

        TfidfModel {
            vocabulary,
            idf,
            vectors,
        }
    }

    /// Vocabulary terms in index order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self, term_index: usize) -> Option<f64> {
        self.idf.get(term_index).copied()
    }

    /// Document vectors, aligned with the input documents
    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }
}

fn select_vocabulary(term_lists: &[Vec<String>], max_features: usize) -> Vec<String> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for terms in term_lists {
        for term in terms {
            *totals.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_features);

    let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
    vocabulary.sort();
    vocabulary
}

fn normalize(vector: &mut TermVector) {
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in vector.iter_mut() {
            *w /= norm;
        }
    }
}

/// Dot product of two sorted sparse vectors.
///
/// Inputs are unit length (or empty), so this is their cosine similarity.
pub fn cosine(a: &TermVector, b: &TermVector) -> f64 {
    let (mut i, mut j) = (0, 0);
    let mut dot = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

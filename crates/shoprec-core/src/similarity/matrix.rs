//! Dense pairwise similarity matrix

use super::tfidf::{cosine, TermVector};

/// Symmetric N×N matrix stored row-major
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl SimilarityMatrix {
    /// Score every pair i <= j and mirror it.
    ///
    /// The diagonal is exactly 1 even for all-zero vectors. Off-diagonal
    /// scores involving an all-zero vector are 0.
    pub fn from_vectors(vectors: &[TermVector]) -> Self {
        let size = vectors.len();
        let mut cells = vec![0.0; size * size];

        for i in 0..size {
            cells[i * size + i] = 1.0;
            for j in (i + 1)..size {
                let score = cosine(&vectors[i], &vectors[j]).clamp(0.0, 1.0);
                cells[i * size + j] = score;
                cells[j * size + i] = score;
            }
        }

        SimilarityMatrix { size, cells }
    }

    /// Matrix dimension
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.cells[i * self.size + j])
        } else {
            None
        }
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.size {
            Some(&self.cells[i * self.size..(i + 1) * self.size])
        } else {
            None
        }
    }
}

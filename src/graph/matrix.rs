//! Dense sentence-similarity matrix
//!
//! The matrix is the weighted adjacency of an undirected graph over sentence
//! indices. It is square, symmetric and has a zero diagonal; every entry is in
//! [0, 1]. Rows are stored contiguously, which is what power iteration wants.

use super::similarity::SimilarityScorer;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// An N×N similarity matrix in row-major order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    weights: Vec<f64>,
    row_totals: Vec<f64>,
}

impl SimilarityMatrix {
    /// Build from filtered token sets, one per sentence
    ///
    /// Only the upper triangle is scored; the lower triangle is mirrored.
    pub fn from_token_sets(sets: &[FxHashSet<String>]) -> Self {
        let n = sets.len();
        let mut weights = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = SimilarityScorer::set_similarity(&sets[i], &sets[j]);
                weights[i * n + j] = sim;
                weights[j * n + i] = sim;
            }
        }
        Self::from_weights(n, weights)
    }

    /// Build from filtered token sets, scoring rows on the rayon pool
    ///
    /// Produces the same matrix as [`SimilarityMatrix::from_token_sets`].
    pub fn from_token_sets_parallel(sets: &[FxHashSet<String>]) -> Self {
        let n = sets.len();
        let rows: Vec<Vec<f64>> = (0..n)
            .into_par_iter()
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if i == j {
                            0.0
                        } else if i < j {
                            SimilarityScorer::set_similarity(&sets[i], &sets[j])
                        } else {
                            SimilarityScorer::set_similarity(&sets[j], &sets[i])
                        }
                    })
                    .collect()
            })
            .collect();
        Self::from_weights(n, rows.into_iter().flatten().collect())
    }

    /// Build directly from sentence texts
    pub fn build<S: AsRef<str>>(
        scorer: &SimilarityScorer,
        sentences: &[S],
        parallel: bool,
    ) -> Self {
        let sets: Vec<FxHashSet<String>> = sentences
            .iter()
            .map(|s| scorer.filter().token_set(s.as_ref()))
            .collect();
        if parallel {
            Self::from_token_sets_parallel(&sets)
        } else {
            Self::from_token_sets(&sets)
        }
    }

    fn from_weights(size: usize, weights: Vec<f64>) -> Self {
        let row_totals = if size == 0 {
            Vec::new()
        } else {
            weights.chunks(size).map(|row| row.iter().sum()).collect()
        };
        Self {
            size,
            weights,
            row_totals,
        }
    }

    /// Number of sentences (rows)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    /// Sum of edge weights leaving node `i`
    pub fn row_total(&self, i: usize) -> f64 {
        self.row_totals[i]
    }

    /// Nonzero edges leaving node `i`
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.row(i)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0.0)
            .map(|(j, &w)| (j, w))
    }

    /// Nodes with no outgoing weight
    pub fn dangling_nodes(&self) -> Vec<usize> {
        (0..self.size)
            .filter(|&i| self.row_totals[i] <= 0.0)
            .collect()
    }

    /// Number of nonzero directed edges (each undirected edge counted twice)
    pub fn num_edges(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0.0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::lexical::LexicalFilter;
    use crate::nlp::stopwords::StopwordFilter;
    use std::sync::Arc;

    fn scorer() -> SimilarityScorer {
        let stopwords = StopwordFilter::from_list(&["the", "a", "is"]);
        SimilarityScorer::new(LexicalFilter::new(Arc::new(stopwords)))
    }

    const SENTENCES: [&str; 4] = [
        "The cat sat on the mat.",
        "A cat is on a mat.",
        "Rockets reach orbit.",
        "The the the.",
    ];

    #[test]
    fn test_symmetric_zero_diagonal() {
        let m = SimilarityMatrix::build(&scorer(), &SENTENCES, false);

        assert_eq!(m.size(), 4);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                assert_eq!(m.get(i, j), m.get(j, i));
                assert!((0.0..=1.0).contains(&m.get(i, j)));
            }
        }
        assert!(m.get(0, 1) > 0.0);
        assert_eq!(m.get(0, 2), 0.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let s = scorer();
        let seq = SimilarityMatrix::build(&s, &SENTENCES, false);
        let par = SimilarityMatrix::build(&s, &SENTENCES, true);
        assert_eq!(seq, par);
    }

    #[test]
    fn test_dangling_nodes() {
        let m = SimilarityMatrix::build(&scorer(), &SENTENCES, false);
        assert_eq!(m.dangling_nodes(), vec![2, 3]);
        assert_eq!(m.num_edges(), 2);
        assert_eq!(m.neighbors(0).collect::<Vec<_>>(), vec![(1, m.get(0, 1))]);
    }

    #[test]
    fn test_empty() {
        let m = SimilarityMatrix::from_token_sets(&[]);
        assert!(m.is_empty());
        assert!(m.dangling_nodes().is_empty());
    }
}

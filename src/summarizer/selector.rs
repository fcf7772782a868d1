//! Diversity-aware sentence selection for summarization
//!
//! A simplified Maximal Marginal Relevance policy: candidates are visited in
//! rank order and accepted only if they are not too similar to anything
//! already chosen. If that leaves the quota short, the best remaining
//! candidates are added regardless of similarity.

use crate::graph::matrix::SimilarityMatrix;
use crate::types::{Sentence, DIVERSITY_THRESHOLD};

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Selected sentence indices in document order
    pub indices: Vec<usize>,
    /// Indices that were added by the quota fill, bypassing the diversity check
    pub filled: Vec<usize>,
}

impl Selection {
    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Check if the quota fill had to run
    pub fn used_fill(&self) -> bool {
        !self.filled.is_empty()
    }
}

/// Greedy diversity selector
#[derive(Debug, Clone)]
pub struct DiversitySelector {
    threshold: f64,
}

impl Default for DiversitySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl DiversitySelector {
    /// Create a selector with the default threshold (0.5)
    pub fn new() -> Self {
        Self {
            threshold: DIVERSITY_THRESHOLD,
        }
    }

    /// Set the redundancy threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Select from sentences already sorted by rank (best first)
    pub fn select(
        &self,
        ranked: &[Sentence],
        matrix: &SimilarityMatrix,
        num_sentences: usize,
    ) -> Selection {
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        self.select_by(&order, num_sentences, |a, b| matrix.get(a, b))
    }

    /// Select from ranked indices using an arbitrary similarity function
    pub fn select_by<F>(&self, ranked: &[usize], num_sentences: usize, similarity: F) -> Selection
    where
        F: Fn(usize, usize) -> f64,
    {
        let mut selected: Vec<usize> = Vec::with_capacity(num_sentences);

        if let Some(&top) = ranked.first() {
            selected.push(top);
        }

        for &candidate in ranked.iter().skip(1) {
            if selected.len() >= num_sentences {
                break;
            }

            let max_similarity = selected
                .iter()
                .map(|&chosen| similarity(candidate, chosen))
                .fold(0.0, f64::max);

            if max_similarity < self.threshold {
                selected.push(candidate);
            }
        }

        let mut filled = Vec::new();
        for &candidate in ranked {
            if selected.len() >= num_sentences {
                break;
            }
            if !selected.contains(&candidate) {
                selected.push(candidate);
                filled.push(candidate);
            }
        }

        selected.sort_unstable();
        Selection {
            indices: selected,
            filled,
        }
    }
}

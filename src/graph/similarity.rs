//! Pairwise sentence similarity
//!
//! Similarity blends two overlap signals over filtered token sets:
//!
//! - Jaccard: |A ∩ B| / |A ∪ B|
//! - Length-weighted overlap: sum of char lengths over A ∩ B divided by the
//!   same sum over A ∪ B (longer words count for more)
//!
//! `similarity = 0.7 * jaccard + 0.3 * weighted`

use crate::nlp::lexical::LexicalFilter;
use crate::types::JACCARD_WEIGHT;
use rustc_hash::FxHashSet;

/// Scores sentence pairs by token overlap
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    filter: LexicalFilter,
}

impl SimilarityScorer {
    /// Create a scorer using the given lexical filter
    pub fn new(filter: LexicalFilter) -> Self {
        Self { filter }
    }

    /// The filter used to tokenize sentences
    pub fn filter(&self) -> &LexicalFilter {
        &self.filter
    }

    /// Similarity of two sentences in [0, 1]
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let set_a = self.filter.token_set(a);
        let set_b = self.filter.token_set(b);
        Self::set_similarity(&set_a, &set_b)
    }

    /// Similarity of two pre-filtered token sets in [0, 1]
    ///
    /// Returns 0 if either set is empty. A non-finite result is logged and
    /// reported as 0.
    pub fn set_similarity(a: &FxHashSet<String>, b: &FxHashSet<String>) -> f64 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

        let mut intersection = 0usize;
        let mut common_len = 0usize;
        for word in small.iter().filter(|w| large.contains(*w)) {
            intersection += 1;
            common_len += word.chars().count();
        }

        let union = a.len() + b.len() - intersection;
        let total_len: usize = a.iter().chain(b.iter()).map(|w| w.chars().count()).sum();
        let union_len = total_len - common_len;

        if union == 0 || union_len == 0 {
            return 0.0;
        }

        let jaccard = intersection as f64 / union as f64;
        let weighted = common_len as f64 / union_len as f64;
        let score = JACCARD_WEIGHT * jaccard + (1.0 - JACCARD_WEIGHT) * weighted;

        if score.is_finite() {
            score.clamp(0.0, 1.0)
        } else {
            tracing::warn!(score, "non-finite sentence similarity, using 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use std::sync::Arc;

    fn scorer() -> SimilarityScorer {
        let stopwords = StopwordFilter::from_list(&["the", "is", "a", "on"]);
        SimilarityScorer::new(LexicalFilter::new(Arc::new(stopwords)))
    }

    #[test]
    fn test_identical_sentences() {
        let s = scorer();
        let sim = s.similarity("The cat sat.", "the CAT sat!");
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sentences() {
        let s = scorer();
        assert_eq!(s.similarity("Cats purr.", "Dogs bark."), 0.0);
    }

    #[test]
    fn test_known_value() {
        // {cat, sat} vs {cat, ran}: jaccard = 1/3, weighted = 3 / (3 + 3 + 3)
        let s = scorer();
        let sim = s.similarity("The cat sat.", "A cat ran.");
        let expected = 0.7 * (1.0 / 3.0) + 0.3 * (3.0 / 9.0);
        assert!((sim - expected).abs() < 1e-12);
    }

    #[test]
    fn test_length_weighting() {
        // {elephant, ox} vs {elephant, yak}: jaccard = 1/3, weighted = 8 / 13
        let s = scorer();
        let sim = s.similarity("Elephant ox.", "Elephant yak.");
        let expected = 0.7 * (1.0 / 3.0) + 0.3 * (8.0 / 13.0);
        assert!((sim - expected).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let s = scorer();
        let a = "The quick brown fox jumps over the lazy dog.";
        let b = "A quick red fox sleeps on the porch.";
        assert_eq!(s.similarity(a, b), s.similarity(b, a));
    }

    #[test]
    fn test_english_content_words_are_compared() {
        let s = SimilarityScorer::new(LexicalFilter::new(Arc::new(StopwordFilter::english())));
        let text = "New research shows important information about the world.";

        assert!(!s.filter().tokens(text).is_empty());
        assert!((s.similarity(text, text) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_stopword_only_sentence_scores_zero() {
        let s = scorer();
        assert_eq!(s.similarity("The is a.", "The cat sat."), 0.0);
        assert_eq!(s.similarity("", "The cat sat."), 0.0);
    }
}

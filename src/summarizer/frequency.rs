//! Word-frequency sentence scoring
//!
//! Each token's frequency is its count divided by the count of the most
//! frequent token, so the top word is always 1.0. A sentence scores the sum of
//! its tokens' frequencies over `token_count + 1`; the extra 1 keeps
//! token-less sentences at zero and slightly discounts very short ones.

use crate::nlp::lexical::LexicalFilter;
use crate::types::{target_sentence_count, Sentence, LEAD_MULTIPLIER, TAIL_MULTIPLIER};
use rustc_hash::FxHashMap;

/// Token -> normalized frequency in [0, 1]
pub type WordFrequencyMap = FxHashMap<String, f64>;

/// Scores sentences by the document-wide frequency of their words
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    filter: LexicalFilter,
}

impl FrequencyScorer {
    /// Create a scorer using the given lexical filter
    pub fn new(filter: LexicalFilter) -> Self {
        Self { filter }
    }

    /// Build the normalized frequency map for a whole document
    pub fn word_frequencies(&self, text: &str) -> WordFrequencyMap {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for token in self.filter.tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
        }

        let max_count = counts.values().copied().max().unwrap_or(1) as f64;
        counts
            .into_iter()
            .map(|(word, count)| (word, count as f64 / max_count))
            .collect()
    }

    /// Score one sentence against a frequency map
    pub fn score_sentence(&self, sentence: &str, frequencies: &WordFrequencyMap) -> f64 {
        let tokens = self.filter.tokens(sentence);
        let total: f64 = tokens
            .iter()
            .filter_map(|t| frequencies.get(t))
            .sum();
        total / (tokens.len() + 1) as f64
    }

    /// Score every sentence in place, including positional multipliers
    ///
    /// Indices 0 and 1 are multiplied by 1.2, the last sentence (when it is
    /// not one of those) by 1.1.
    pub fn score(&self, document: &str, sentences: &mut [Sentence]) {
        let frequencies = self.word_frequencies(document);
        let last = sentences.len().saturating_sub(1);

        for sentence in sentences.iter_mut() {
            let mut score = self.score_sentence(&sentence.text, &frequencies);
            if sentence.index < 2 {
                score *= LEAD_MULTIPLIER;
            } else if sentence.index == last {
                score *= TAIL_MULTIPLIER;
            }
            sentence.score = score;
        }
    }

    /// Indices of the `max(1, floor(n * ratio))` best sentences, in document order
    ///
    /// Ties go to the earlier sentence.
    pub fn select(sentences: &[Sentence], ratio: f64) -> Vec<usize> {
        let mut order: Vec<&Sentence> = sentences.iter().collect();
        order.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut selected: Vec<usize> = order
            .into_iter()
            .take(target_sentence_count(sentences.len(), ratio))
            .map(|s| s.index)
            .collect();
        selected.sort_unstable();
        selected
    }
}

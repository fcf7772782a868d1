//! Lexical filtering shared by both strategies
//!
//! A sentence is lowercased, stripped of ASCII punctuation, split on
//! whitespace and cleared of stopwords before any scoring looks at it.

use super::stopwords::StopwordFilter;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Turns sentences into scoring tokens
#[derive(Debug, Clone)]
pub struct LexicalFilter {
    stopwords: Arc<StopwordFilter>,
}

impl LexicalFilter {
    /// Create a filter over a shared stopword set
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self { stopwords }
    }

    /// The stopword set this filter tests against
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Lowercase, punctuation-free words including stopwords
    pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split_whitespace().filter_map(|raw| {
            let word: String = raw
                .chars()
                .filter(|c| !c.is_ascii_punctuation())
                .flat_map(char::to_lowercase)
                .collect();
            (!word.is_empty()).then_some(word)
        })
    }

    /// Filtered tokens in order of appearance (duplicates kept)
    pub fn tokens(&self, text: &str) -> Vec<String> {
        Self::words(text)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }

    /// Distinct filtered tokens
    pub fn token_set(&self, text: &str) -> FxHashSet<String> {
        Self::words(text)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }
}

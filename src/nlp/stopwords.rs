//! Stopword filtering
//!
//! Stopword lists are the NLTK lists shipped by the `stop-words` crate. A filter is loaded once
//! and then shared read-only (usually behind an `Arc`) by every summarizer
//! built from it.

use crate::types::EXTRACTIVE_FILLER_WORDS;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of lowercase stopwords
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a new stopword filter for the given language
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// English stopwords
    pub fn english() -> Self {
        Self::new("en")
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Add the extractive strategy's filler words
    pub fn with_extractive_fillers(mut self) -> Self {
        self.add_stopwords(&EXTRACTIVE_FILLER_WORDS);
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if an already-lowercased word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                tracing::warn!(language = other, "no stopword list for language, using English");
                LANGUAGE::English
            }
        };

        get(lang)
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

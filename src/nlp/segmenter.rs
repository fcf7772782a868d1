//! Sentence segmentation
//!
//! Segmentation is a capability the summarizers consume through the
//! [`SentenceSegmenter`] trait. The default implementation follows UAX #29
//! sentence boundaries.

use crate::errors::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into an ordered sequence of sentences
pub trait SentenceSegmenter: Send + Sync + std::fmt::Debug {
    /// Segment `text` into trimmed, non-empty sentences in reading order
    fn segment(&self, text: &str) -> Result<Vec<String>>;
}

/// A Unicode-aware segmenter following UAX #29
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Find sentence byte ranges in text
    fn sentence_boundaries(text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        // Last segment
        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        boundaries
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>> {
        Ok(Self::sentence_boundaries(text)
            .into_iter()
            .map(|(start, end)| text[start..end].trim().to_string())
            .collect())
    }
}

//! Summarization components
//!
//! Two independent pipelines share normalization and segmentation:
//!
//! - [`extractive`]: TextRank over a sentence-similarity graph, then
//!   diversity-aware selection.
//! - [`abstractive`]: word-frequency scoring, then transition insertion for
//!   readability.
//!
//! [`engine::SummarizationEngine`] dispatches between them.

pub mod abstractive;
pub mod coherence;
pub mod engine;
pub mod extractive;
pub mod frequency;
pub mod selector;

use crate::errors::{Result, SummarizeError};
use crate::nlp::normalize::normalize;
use crate::nlp::segmenter::SentenceSegmenter;
use crate::types::Sentence;

/// A normalized document split into indexed sentences
#[derive(Debug, Clone)]
pub(crate) struct Document {
    pub normalized: String,
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Normalize and segment `text`
    ///
    /// Fails with `EmptyInput` for empty/whitespace text and with
    /// `NoSentences` when segmentation yields nothing.
    pub(crate) fn prepare(text: &str, segmenter: &dyn SentenceSegmenter) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(SummarizeError::empty_input("text is empty or whitespace"));
        }

        let normalized = normalize(text);
        let sentences = Sentence::from_texts(segmenter.segment(&normalized)?);
        if sentences.is_empty() {
            return Err(SummarizeError::no_sentences(
                "segmentation produced no sentences",
            ));
        }

        tracing::debug!(sentences = sentences.len(), "segmented document");
        Ok(Self {
            normalized,
            sentences,
        })
    }

    /// Join the sentences at `indices` (already in document order)
    pub(crate) fn join(&self, indices: &[usize]) -> String {
        indices
            .iter()
            .map(|&i| self.sentences[i].text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

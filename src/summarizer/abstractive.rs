//! Frequency-based "abstractive" summarization
//!
//! Not generative: sentences are chosen by word frequency and then smoothed
//! with transition phrases. Failures degrade to a fixed message in the
//! string API; [`AbstractiveSummarizer::summarize_detailed`] exposes the
//! typed error instead.

use super::coherence::CoherenceEnhancer;
use super::frequency::FrequencyScorer;
use super::Document;
use crate::errors::Result;
use crate::nlp::lexical::LexicalFilter;
use crate::nlp::segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{Summary, SummarizerConfig, SummaryKind, ERROR_SUMMARY, SHORT_INPUT_SENTENCES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Frequency-scoring summarizer with transition insertion
#[derive(Debug, Clone)]
pub struct AbstractiveSummarizer {
    segmenter: Arc<dyn SentenceSegmenter>,
    scorer: FrequencyScorer,
    enhancer: CoherenceEnhancer,
    seed: Option<u64>,
}

impl Default for AbstractiveSummarizer {
    fn default() -> Self {
        Self::build(
            &SummarizerConfig::default(),
            Arc::new(StopwordFilter::english()),
            Arc::new(UnicodeSentenceSegmenter::new()),
        )
    }
}

impl AbstractiveSummarizer {
    /// Create a summarizer from a loaded stopword set and a segmenter
    pub fn new(
        config: SummarizerConfig,
        stopwords: Arc<StopwordFilter>,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(&config, stopwords, segmenter))
    }

    fn build(
        config: &SummarizerConfig,
        stopwords: Arc<StopwordFilter>,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Self {
        let stopwords = if config.stopwords.is_empty() {
            stopwords
        } else {
            let mut extended = (*stopwords).clone();
            extended.add_stopwords(&config.stopwords);
            Arc::new(extended)
        };

        Self {
            segmenter,
            scorer: FrequencyScorer::new(LexicalFilter::new(stopwords)),
            enhancer: CoherenceEnhancer::new(),
            seed: config.seed,
        }
    }

    /// Replace the coherence enhancer
    pub fn with_enhancer(mut self, enhancer: CoherenceEnhancer) -> Self {
        self.enhancer = enhancer;
        self
    }

    /// Summarize `text`, keeping about `ratio` of its sentences
    ///
    /// Empty input yields an empty string. Any other failure is logged and
    /// replaced by [`ERROR_SUMMARY`].
    pub fn summarize(&self, text: &str, ratio: f64) -> String {
        Self::degrade(self.summarize_detailed(text, ratio))
    }

    /// Like [`AbstractiveSummarizer::summarize`] with a caller-supplied RNG
    pub fn summarize_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        ratio: f64,
        rng: &mut R,
    ) -> String {
        Self::degrade(self.summarize_detailed_with_rng(text, ratio, rng))
    }

    /// Summarize `text` and report which sentences were chosen
    ///
    /// Uses the configured seed when there is one, otherwise the thread RNG.
    pub fn summarize_detailed(&self, text: &str, ratio: f64) -> Result<Summary> {
        match self.seed {
            Some(seed) => {
                self.summarize_detailed_with_rng(text, ratio, &mut StdRng::seed_from_u64(seed))
            }
            None => self.summarize_detailed_with_rng(text, ratio, &mut rand::thread_rng()),
        }
    }

    /// Summarize with a caller-supplied RNG for transition choices
    ///
    /// Documents with three or fewer sentences are returned exactly as given,
    /// without normalization.
    pub fn summarize_detailed_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        ratio: f64,
        rng: &mut R,
    ) -> Result<Summary> {
        let mut doc = Document::prepare(text, self.segmenter.as_ref())?;
        let n = doc.sentences.len();

        if n <= SHORT_INPUT_SENTENCES {
            return Ok(Summary::pass_through(text, n));
        }

        self.scorer.score(&doc.normalized, &mut doc.sentences);
        let selected = FrequencyScorer::select(&doc.sentences, ratio);
        tracing::debug!(selected = ?selected, "abstractive selection");

        let ordered: Vec<&str> = selected
            .iter()
            .map(|&i| doc.sentences[i].text.as_str())
            .collect();
        let enhanced = self.enhancer.enhance(&ordered, rng);

        Ok(Summary {
            text: enhanced.join(" "),
            selected,
            sentence_count: n,
            kind: SummaryKind::Condensed,
        })
    }

    /// Split `text` into sentence-aligned chunks of at most `max_chunk_size`
    /// characters
    ///
    /// Sentence lengths are summed without the joining spaces. A sentence
    /// longer than the budget becomes a chunk of its own. The text is
    /// segmented as given, without normalization.
    pub fn chunk_text(&self, text: &str, max_chunk_size: usize) -> Result<Vec<String>> {
        let mut chunks = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_size = 0;

        for sentence in self.segmenter.segment(text)? {
            let size = sentence.chars().count();
            if current_size + size <= max_chunk_size {
                current.push(sentence);
                current_size += size;
            } else {
                if !current.is_empty() {
                    chunks.push(current.join(" "));
                }
                current = vec![sentence];
                current_size = size;
            }
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }
        Ok(chunks)
    }

    fn degrade(result: Result<Summary>) -> String {
        match result {
            Ok(summary) => summary.text,
            Err(err) if err.is_degenerate_input() => String::new(),
            Err(err) => {
                tracing::error!(error = %err, "abstractive summarization failed");
                ERROR_SUMMARY.to_string()
            }
        }
    }
}

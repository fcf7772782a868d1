//! Strategy dispatch
//!
//! The engine owns one summarizer per strategy, built from the same config,
//! stopword set and segmenter.

use super::abstractive::AbstractiveSummarizer;
use super::extractive::ExtractiveSummarizer;
use crate::errors::Result;
use crate::nlp::segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{BothSummaries, Strategy, Summary, SummarizerConfig};
use std::sync::Arc;

/// Runs either summarization strategy
#[derive(Debug, Clone, Default)]
pub struct SummarizationEngine {
    extractive: ExtractiveSummarizer,
    abstractive: AbstractiveSummarizer,
}

impl SummarizationEngine {
    /// Create an engine from already-loaded resources
    pub fn new(
        config: SummarizerConfig,
        stopwords: Arc<StopwordFilter>,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Result<Self> {
        Ok(Self {
            extractive: ExtractiveSummarizer::new(config.clone(), &stopwords, segmenter.clone())?,
            abstractive: AbstractiveSummarizer::new(config, stopwords, segmenter)?,
        })
    }

    /// Create an engine with the config's stopword language and the default
    /// segmenter
    pub fn from_config(config: SummarizerConfig) -> Result<Self> {
        let stopwords = Arc::new(StopwordFilter::new(&config.language));
        Self::new(config, stopwords, Arc::new(UnicodeSentenceSegmenter::new()))
    }

    /// The extractive summarizer
    pub fn extractive(&self) -> &ExtractiveSummarizer {
        &self.extractive
    }

    /// The abstractive summarizer
    pub fn abstractive(&self) -> &AbstractiveSummarizer {
        &self.abstractive
    }

    /// Summarize `text` with the given strategy
    ///
    /// Extractive failures are returned as errors. The abstractive strategy
    /// never fails here; it reports failure through its fixed error text.
    pub fn summarize(&self, text: &str, ratio: f64, strategy: Strategy) -> Result<String> {
        tracing::debug!(%strategy, ratio, chars = text.len(), "summarize");
        match strategy {
            Strategy::Extractive => self.extractive.summarize(text, ratio),
            Strategy::Abstractive => Ok(self.abstractive.summarize(text, ratio)),
        }
    }

    /// Summarize `text` and report the selection, with typed errors for both
    /// strategies
    pub fn summarize_detailed(
        &self,
        text: &str,
        ratio: f64,
        strategy: Strategy,
    ) -> Result<Summary> {
        match strategy {
            Strategy::Extractive => self.extractive.summarize_detailed(text, ratio),
            Strategy::Abstractive => self.abstractive.summarize_detailed(text, ratio),
        }
    }

    /// Run both strategies on the same text
    pub fn summarize_both(&self, text: &str, ratio: f64) -> Result<BothSummaries> {
        Ok(BothSummaries {
            extractive: self.summarize(text, ratio, Strategy::Extractive)?,
            abstractive: self.summarize(text, ratio, Strategy::Abstractive)?,
        })
    }
}

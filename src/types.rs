//! Core types for rapid_summary
//!
//! This module defines the fundamental data structures used throughout the library,
//! including sentences, summaries, the strategy selector, and configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Tuning Constants
// ============================================================================

/// Damping factor for PageRank
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Maximum PageRank iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Per-node convergence tolerance for PageRank
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-6;

/// Candidates at or above this similarity to a selected sentence are skipped
pub const DIVERSITY_THRESHOLD: f64 = 0.5;

/// Weight of the Jaccard term in sentence similarity (the rest goes to the
/// length-weighted overlap)
pub const JACCARD_WEIGHT: f64 = 0.7;

/// Additive score boosts for the first two sentences (extractive)
pub const LEAD_BOOSTS: [f64; 2] = [0.2, 0.1];

/// Additive score boost for the last sentence (extractive)
pub const TAIL_BOOST: f64 = 0.1;

/// Score multiplier for the first two sentences (abstractive)
pub const LEAD_MULTIPLIER: f64 = 1.2;

/// Score multiplier for the last sentence (abstractive)
pub const TAIL_MULTIPLIER: f64 = 1.1;

/// Documents with at most this many sentences are returned unchanged
pub const SHORT_INPUT_SENTENCES: usize = 3;

/// Chance of prefixing an additive transition when no cue word matched
pub const ADDITIVE_TRANSITION_PROBABILITY: f64 = 0.3;

/// Filler words the extractive strategy treats as stopwords on top of the
/// language list
pub const EXTRACTIVE_FILLER_WORDS: [&str; 7] =
    ["also", "would", "could", "may", "might", "often", "usually"];

/// Returned by the abstractive string API when the pipeline fails
pub const ERROR_SUMMARY: &str = "Error generating summary. Please try again.";

/// Number of sentences to keep: `max(1, floor(total * ratio))`
///
/// The ratio is not clamped. Negative or NaN ratios fall back to one sentence
/// and oversized ratios saturate.
pub fn target_sentence_count(total: usize, ratio: f64) -> usize {
    ((total as f64 * ratio).floor() as usize).max(1)
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the normalized input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text
    pub text: String,
    /// Position within the document (0-based, identity key)
    pub index: usize,
    /// Importance score assigned by a ranking strategy
    pub score: f64,
}

impl Sentence {
    /// Create a new unscored sentence
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            score: 0.0,
        }
    }

    /// Wrap segmenter output, assigning contiguous indices
    pub fn from_texts<I, S>(texts: I) -> Vec<Sentence>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Sentence::new(text, index))
            .collect()
    }

    /// Ranking order: score descending, then index descending.
    ///
    /// Equal scores put the later sentence first. NaN scores compare as equal
    /// to everything.
    pub fn rank_cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
            .then_with(|| other.text.cmp(&self.text))
    }
}

// ============================================================================
// Strategy
// ============================================================================

/// Which summarization pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// TextRank sentence ranking with diversity selection
    #[default]
    Extractive,
    /// Word-frequency scoring followed by transition insertion
    Abstractive,
}

impl Strategy {
    /// Get the lowercase name of this strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Extractive => "extractive",
            Strategy::Abstractive => "abstractive",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "extractive" => Ok(Strategy::Extractive),
            "abstractive" => Ok(Strategy::Abstractive),
            other => Err(SummarizeError::invalid_config(format!(
                "unknown strategy '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Summary
// ============================================================================

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Sentences were ranked and a subset was selected
    Condensed,
    /// The input was too short to condense and was returned as-is
    PassThrough,
}

/// A summary together with the selection that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text
    pub text: String,
    /// Indices of the selected sentences, in document order
    pub selected: Vec<usize>,
    /// Number of sentences the normalized document was split into
    pub sentence_count: usize,
    /// Whether ranking ran
    pub kind: SummaryKind,
}

impl Summary {
    /// A summary that returns the input unchanged
    pub fn pass_through(text: impl Into<String>, sentence_count: usize) -> Self {
        Self {
            text: text.into(),
            selected: (0..sentence_count).collect(),
            sentence_count,
            kind: SummaryKind::PassThrough,
        }
    }

    /// Check if ranking was skipped for this summary
    pub fn is_pass_through(&self) -> bool {
        self.kind == SummaryKind::PassThrough
    }
}

/// Output of running both strategies on the same document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BothSummaries {
    pub extractive: String,
    pub abstractive: String,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration shared by both summarizers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Damping factor for PageRank (typically 0.85)
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Maximum iterations for PageRank convergence
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Per-node convergence threshold
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: f64,
    /// Similarity at or above which a candidate counts as redundant
    #[serde(default = "default_diversity_threshold")]
    pub diversity_threshold: f64,
    /// Language code for stopwords (e.g., "en")
    #[serde(default = "default_language")]
    pub language: String,
    /// Optional additional stopwords (extends the built-in list)
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Seed for transition choices; `None` uses the thread RNG
    #[serde(default)]
    pub seed: Option<u64>,
    /// Build the similarity matrix on the rayon pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_convergence_threshold() -> f64 {
    DEFAULT_CONVERGENCE_THRESHOLD
}

fn default_diversity_threshold() -> f64 {
    DIVERSITY_THRESHOLD
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            diversity_threshold: DIVERSITY_THRESHOLD,
            language: default_language(),
            stopwords: Vec::new(),
            seed: None,
            parallel: false,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.diversity_threshold) {
            return Err(SummarizeError::invalid_config(format!(
                "diversity_threshold must be between 0 and 1, got {}",
                self.diversity_threshold
            )));
        }

        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set diversity threshold
    pub fn with_diversity_threshold(mut self, threshold: f64) -> Self {
        self.diversity_threshold = threshold;
        self
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: seed the transition RNG
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: build the similarity matrix in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_sentence_count() {
        assert_eq!(target_sentence_count(9, 0.3), 2);
        assert_eq!(target_sentence_count(10, 0.3), 3);
        assert_eq!(target_sentence_count(10, 0.0), 1);
        assert_eq!(target_sentence_count(4, 1.0), 4);
        assert_eq!(target_sentence_count(4, 2.0), 8);
        assert_eq!(target_sentence_count(4, -0.5), 1);
        assert_eq!(target_sentence_count(4, f64::NAN), 1);
    }

    #[test]
    fn test_rank_cmp_orders_by_score_then_later_index() {
        let mut sentences = Sentence::from_texts(["a", "b", "c"]);
        for (sentence, score) in sentences.iter_mut().zip([0.5, 0.9, 0.5]) {
            sentence.score = score;
        }
        sentences.sort_by(Sentence::rank_cmp);

        let order: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_from_texts_assigns_contiguous_indices() {
        let sentences = Sentence::from_texts(["One.", "Two.", "One."]);
        assert_eq!(sentences.len(), 3);
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
        // Duplicated text keeps separate identities
        assert_eq!(sentences[0].text, sentences[2].text);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("extractive".parse::<Strategy>().unwrap(), Strategy::Extractive);
        assert_eq!(" Abstractive ".parse::<Strategy>().unwrap(), Strategy::Abstractive);
        assert!("both".parse::<Strategy>().is_err());
        assert_eq!(Strategy::Abstractive.to_string(), "abstractive");
    }

    #[test]
    fn test_config_validation() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());

        let bad_config = SummarizerConfig::default().with_damping(1.5);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_max_iterations(0);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_convergence_threshold(0.0);
        assert!(bad_config.validate().is_err());

        let bad_config = SummarizerConfig::default().with_diversity_threshold(-0.1);
        assert!(bad_config.validate().is_err());
    }

    #[test]
    fn test_config_json_defaults() {
        let config = SummarizerConfig::from_json(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.damping, DEFAULT_DAMPING);
        assert_eq!(config.language, "en");

        let json = config.to_json().unwrap();
        let back = SummarizerConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_json_rejects_invalid() {
        let err = SummarizerConfig::from_json(r#"{"damping": 2.0}"#).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig { .. }));
    }

    #[test]
    fn test_summary_pass_through() {
        let summary = Summary::pass_through("One. Two.", 2);
        assert!(summary.is_pass_through());
        assert_eq!(summary.selected, vec![0, 1]);
    }
}

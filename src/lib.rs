//! # rapid_summary
//!
//! Single-document text summarization with two strategies.
//!
//! - **Extractive**: TextRank over a sentence-similarity graph, with
//!   positional boosts and diversity-aware selection.
//! - **Abstractive** (pseudo): word-frequency sentence scoring followed by
//!   transition-phrase insertion. No text is generated.
//!
//! Stopwords and sentence segmentation are injected at construction, so the
//! core never touches the network or global state.
//!
//! ```no_run
//! use rapid_summary::{SummarizationEngine, Strategy};
//!
//! let engine = SummarizationEngine::default();
//! let summary = engine.summarize("Some long text. ...", 0.3, Strategy::Extractive)?;
//! # Ok::<(), rapid_summary::SummarizeError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{BothSummaries, Sentence, Strategy, Summary, SummarizerConfig, SummaryKind};

// Re-export main functionality
pub use graph::{matrix::SimilarityMatrix, similarity::SimilarityScorer};
pub use nlp::{
    lexical::LexicalFilter,
    normalize::normalize,
    segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter},
    stopwords::StopwordFilter,
};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use summarizer::{
    abstractive::AbstractiveSummarizer,
    coherence::CoherenceEnhancer,
    engine::SummarizationEngine,
    extractive::{ExtractiveSummarizer, GraphRanker},
    frequency::FrequencyScorer,
    selector::{DiversitySelector, Selection},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

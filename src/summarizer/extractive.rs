//! Extractive summarization with TextRank
//!
//! Sentences are scored by PageRank over their similarity graph, nudged by
//! position (openings and closings tend to carry the thesis), and then picked
//! greedily while skipping near-duplicates.

use super::selector::{DiversitySelector, Selection};
use super::Document;
use crate::errors::{Result, SummarizeError};
use crate::graph::matrix::SimilarityMatrix;
use crate::graph::similarity::SimilarityScorer;
use crate::nlp::lexical::LexicalFilter;
use crate::nlp::segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::nlp::stopwords::StopwordFilter;
use crate::pagerank::standard::StandardPageRank;
use crate::types::{
    target_sentence_count, Sentence, Summary, SummarizerConfig, SummaryKind, LEAD_BOOSTS,
    SHORT_INPUT_SENTENCES, TAIL_BOOST,
};
use std::sync::Arc;

/// Add the positional boosts to raw PageRank scores
///
/// Index 0 gets +0.2, index 1 gets +0.1, and the last sentence gets +0.1 when
/// it is not one of the first two. Scores are not renormalized.
pub fn apply_position_boosts(scores: &mut [f64]) {
    let n = scores.len();
    for (score, boost) in scores.iter_mut().zip(LEAD_BOOSTS) {
        *score += boost;
    }
    if n > LEAD_BOOSTS.len() {
        scores[n - 1] += TAIL_BOOST;
    }
}

/// Scores sentences by PageRank over the similarity graph
#[derive(Debug, Clone)]
pub struct GraphRanker {
    pagerank: StandardPageRank,
    parallel: bool,
}

impl GraphRanker {
    /// Create a ranker from the summarizer config
    pub fn new(config: &SummarizerConfig) -> Self {
        Self {
            pagerank: StandardPageRank::new()
                .with_damping(config.damping)
                .with_max_iterations(config.max_iterations)
                .with_threshold(config.convergence_threshold),
            parallel: config.parallel,
        }
    }

    /// Score `sentences` in place and return the similarity matrix used
    pub fn rank(
        &self,
        scorer: &SimilarityScorer,
        sentences: &mut [Sentence],
    ) -> Result<SimilarityMatrix> {
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        let matrix = SimilarityMatrix::build(scorer, &texts, self.parallel);

        let result = self.pagerank.run(&matrix);
        if result.converged {
            tracing::debug!(
                iterations = result.iterations,
                edges = matrix.num_edges(),
                top = ?result.top_n(1),
                "pagerank converged"
            );
        } else {
            tracing::warn!(
                iterations = result.iterations,
                delta = result.delta,
                "pagerank did not converge, using last iterate"
            );
        }

        let mut scores = result.scores;
        apply_position_boosts(&mut scores);

        if let Some(bad) = scores.iter().position(|s| !s.is_finite()) {
            return Err(SummarizeError::scoring_failure(format!(
                "score for sentence {} is not finite",
                bad
            )));
        }

        for (sentence, score) in sentences.iter_mut().zip(scores) {
            sentence.score = score;
        }
        Ok(matrix)
    }
}

/// TextRank-based extractive summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    segmenter: Arc<dyn SentenceSegmenter>,
    scorer: SimilarityScorer,
    ranker: GraphRanker,
    selector: DiversitySelector,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::build(
            &SummarizerConfig::default(),
            &StopwordFilter::english(),
            Arc::new(UnicodeSentenceSegmenter::new()),
        )
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer from a loaded stopword set and a segmenter
    ///
    /// The stopword set is extended with the extractive filler words and the
    /// config's extra stopwords.
    pub fn new(
        config: SummarizerConfig,
        stopwords: &StopwordFilter,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(&config, stopwords, segmenter))
    }

    fn build(
        config: &SummarizerConfig,
        stopwords: &StopwordFilter,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Self {
        let mut stopwords = stopwords.clone().with_extractive_fillers();
        stopwords.add_stopwords(&config.stopwords);

        Self {
            segmenter,
            scorer: SimilarityScorer::new(LexicalFilter::new(Arc::new(stopwords))),
            ranker: GraphRanker::new(config),
            selector: DiversitySelector::new().with_threshold(config.diversity_threshold),
        }
    }

    /// The similarity scorer (and through it, the stopword set) in use
    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Summarize `text`, keeping about `ratio` of its sentences
    ///
    /// Empty input and input with no sentences yield an empty string. Other
    /// failures are returned to the caller.
    pub fn summarize(&self, text: &str, ratio: f64) -> Result<String> {
        match self.summarize_detailed(text, ratio) {
            Ok(summary) => Ok(summary.text),
            Err(err) if err.is_degenerate_input() => Ok(String::new()),
            Err(err) => Err(err),
        }
    }

    /// Summarize `text` and report which sentences were chosen
    ///
    /// Documents with three or fewer sentences are returned normalized but
    /// otherwise unchanged.
    pub fn summarize_detailed(&self, text: &str, ratio: f64) -> Result<Summary> {
        let mut doc = Document::prepare(text, self.segmenter.as_ref())?;
        let n = doc.sentences.len();

        if n <= SHORT_INPUT_SENTENCES {
            return Ok(Summary::pass_through(doc.normalized, n));
        }

        let selection = self.select(&mut doc.sentences, ratio)?;
        tracing::debug!(
            selected = ?selection.indices,
            fill = selection.used_fill(),
            "extractive selection"
        );

        Ok(Summary {
            text: doc.join(&selection.indices),
            selected: selection.indices,
            sentence_count: n,
            kind: SummaryKind::Condensed,
        })
    }

    /// Rank `sentences` and pick `max(1, floor(n * ratio))` of them
    pub fn select(&self, sentences: &mut [Sentence], ratio: f64) -> Result<Selection> {
        let matrix = self.ranker.rank(&self.scorer, sentences)?;

        let mut ranked = sentences.to_vec();
        ranked.sort_by(Sentence::rank_cmp);

        let num_sentences = target_sentence_count(sentences.len(), ratio);
        Ok(self.selector.select(&ranked, &matrix, num_sentences))
    }
}

//! Property-based tests using proptest

use proptest::prelude::*;
use rapid_summary::{
    normalize, AbstractiveSummarizer, DiversitySelector, ExtractiveSummarizer, FrequencyScorer,
    LexicalFilter, SimilarityMatrix, SimilarityScorer, StandardPageRank, StopwordFilter,
    SummarizerConfig, UnicodeSentenceSegmenter,
};
use std::sync::Arc;

/// A document of `n` capitalized sentences built from lowercase words
fn document(min_sentences: usize, max_sentences: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::collection::vec("[a-z]{3,8}", 2..8).prop_map(|words| {
            let mut sentence = words.join(" ");
            if let Some(first) = sentence.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            sentence.push('.');
            sentence
        }),
        min_sentences..max_sentences,
    )
}

fn scorer() -> SimilarityScorer {
    SimilarityScorer::new(LexicalFilter::new(Arc::new(StopwordFilter::english())))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn test_normalize_idempotent(text in "[ a-zA-Z.\\n\\t\\r]{0,80}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert!(!once.contains('\n'));
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn test_similarity_symmetric_and_bounded(
        a in "[a-e ]{0,30}",
        b in "[a-e ]{0,30}"
    ) {
        let s = scorer();
        let ab = s.similarity(&a, &b);
        let ba = s.similarity(&b, &a);

        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn test_matrix_invariants(sentences in document(1, 12)) {
        let matrix = SimilarityMatrix::build(&scorer(), &sentences, false);

        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.size() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                prop_assert!((0.0..=1.0).contains(&matrix.get(i, j)));
            }
        }
    }

    #[test]
    fn test_pagerank_scores_sum_to_one(sentences in document(2, 20)) {
        let matrix = SimilarityMatrix::build(&scorer(), &sentences, false);
        let result = StandardPageRank::new().run(&matrix);

        let sum: f64 = result.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "Scores sum to {} instead of 1", sum);
    }

    #[test]
    fn test_extractive_selection_count_and_order(
        sentences in document(4, 15),
        ratio in 0.0f64..1.0
    ) {
        let text = sentences.join(" ");
        let summary = ExtractiveSummarizer::default()
            .summarize_detailed(&text, ratio)
            .unwrap();

        let n = summary.sentence_count;
        prop_assert_eq!(n, sentences.len());
        prop_assert_eq!(summary.selected.len(), ((n as f64 * ratio).floor() as usize).max(1));
        prop_assert!(summary.selected.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_abstractive_selection_count(
        sentences in document(4, 15),
        ratio in 0.0f64..1.0,
        seed in any::<u64>()
    ) {
        let text = sentences.join(" ");
        let summary = AbstractiveSummarizer::new(
            SummarizerConfig::default().with_seed(seed),
            Arc::new(StopwordFilter::english()),
            Arc::new(UnicodeSentenceSegmenter::new()),
        )
        .unwrap()
        .summarize_detailed(&text, ratio)
        .unwrap();

        let n = summary.sentence_count;
        prop_assert_eq!(summary.selected.len(), ((n as f64 * ratio).floor() as usize).max(1));
        prop_assert!(summary.selected.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_frequency_max_is_one(text in "[a-z ]{1,60}") {
        let scorer = FrequencyScorer::new(LexicalFilter::new(Arc::new(StopwordFilter::empty())));
        let freqs = scorer.word_frequencies(&text);

        if !freqs.is_empty() {
            let max = freqs.values().copied().fold(0.0, f64::max);
            prop_assert_eq!(max, 1.0);
            prop_assert!(freqs.values().all(|&f| f > 0.0 && f <= 1.0));
        }
    }

    #[test]
    fn test_diversity_selector_quota(
        ranked in Just((0..10).collect::<Vec<usize>>()).prop_shuffle(),
        quota in 1usize..12
    ) {
        let selection = DiversitySelector::new().select_by(&ranked, quota, |a, b| {
            if a % 2 == b % 2 { 0.9 } else { 0.1 }
        });

        prop_assert_eq!(selection.len(), quota.min(10));
        prop_assert!(selection.indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(selection.used_fill(), quota > 2);
    }
}

//! Benchmarks for rapid_summary

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rapid_summary::*;
use std::sync::Arc;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.

Natural language processing is a subfield of linguistics, computer science,
and artificial intelligence concerned with the interactions between computers and
human language. Techniques are used to analyze, understand, and generate human
language in a valuable way. Key applications include sentiment analysis, machine
translation, and text summarization.
"#;

fn sentences(text: &str) -> Vec<String> {
    UnicodeSentenceSegmenter::new()
        .segment(&normalize(text))
        .unwrap_or_default()
}

fn benchmark_segmentation(c: &mut Criterion) {
    let segmenter = UnicodeSentenceSegmenter::new();

    c.bench_function("normalize_and_segment", |b| {
        b.iter(|| segmenter.segment(&normalize(black_box(SAMPLE_TEXT))))
    });

    let mut group = c.benchmark_group("segment_by_size");
    for size in [1, 5, 10, 20].iter() {
        let text = normalize(&SAMPLE_TEXT.repeat(*size));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_similarity_matrix(c: &mut Criterion) {
    let scorer = SimilarityScorer::new(LexicalFilter::new(Arc::new(
        StopwordFilter::english().with_extractive_fillers(),
    )));
    let small = sentences(SAMPLE_TEXT);
    let large = sentences(&SAMPLE_TEXT.repeat(10));

    c.bench_function("similarity_matrix", |b| {
        b.iter(|| SimilarityMatrix::build(&scorer, black_box(&small), false))
    });

    let mut group = c.benchmark_group("similarity_matrix_parallel");
    group.bench_function("sequential", |b| {
        b.iter(|| SimilarityMatrix::build(&scorer, black_box(&large), false))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| SimilarityMatrix::build(&scorer, black_box(&large), true))
    });
    group.finish();
}

fn benchmark_pagerank(c: &mut Criterion) {
    let scorer = SimilarityScorer::new(LexicalFilter::new(Arc::new(StopwordFilter::english())));
    let matrix = SimilarityMatrix::build(&scorer, &sentences(&SAMPLE_TEXT.repeat(5)), false);

    c.bench_function("pagerank", |b| {
        b.iter(|| StandardPageRank::new().run(black_box(&matrix)))
    });
}

fn benchmark_summarizers(c: &mut Criterion) {
    let extractive = ExtractiveSummarizer::default();
    let abstractive = AbstractiveSummarizer::default();

    let mut group = c.benchmark_group("summarize");
    group.bench_function("extractive", |b| {
        b.iter(|| extractive.summarize(black_box(SAMPLE_TEXT), 0.3))
    });
    group.bench_function("abstractive", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| abstractive.summarize_with_rng(black_box(SAMPLE_TEXT), 0.3, &mut rng))
    });
    group.finish();

    let mut group = c.benchmark_group("extractive_by_size");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| extractive.summarize(black_box(text), 0.3))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_segmentation,
    benchmark_similarity_matrix,
    benchmark_pagerank,
    benchmark_summarizers
);
criterion_main!(benches);

//! Sentence graph construction
//!
//! Sentences are nodes; edge weights are pairwise similarities.

pub mod matrix;
pub mod similarity;

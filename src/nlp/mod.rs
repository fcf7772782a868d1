//! Natural Language Processing components
//!
//! This module provides normalization, sentence segmentation, stopword
//! filtering and lexical token extraction.

pub mod lexical;
pub mod normalize;
pub mod segmenter;
pub mod stopwords;

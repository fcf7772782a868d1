//! Error types for rapid_summary
//!
//! This module defines the error types used throughout the library.
//! Degenerate input (empty text, no sentences) is reported as an error kind
//! so callers can tell it apart from a real summary.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for rapid_summary
#[derive(Error, Debug, Clone)]
pub enum SummarizeError {
    /// Input text is empty or whitespace only
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Segmentation produced no sentences
    #[error("No sentences: {message}")]
    NoSentences { message: String },

    /// Sentence scoring produced unusable values
    #[error("Scoring failure: {message}")]
    ScoringFailure { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal failure: {message}")]
    InternalFailure { message: String },
}

impl SummarizeError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create a no sentences error
    pub fn no_sentences(message: impl Into<String>) -> Self {
        Self::NoSentences {
            message: message.into(),
        }
    }

    /// Create a scoring failure error
    pub fn scoring_failure(message: impl Into<String>) -> Self {
        Self::ScoringFailure {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal failure error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalFailure {
            message: message.into(),
        }
    }

    /// Check if this error only means "nothing to summarize"
    ///
    /// String-returning entry points map these to an empty summary.
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::NoSentences { .. })
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

//! Transition insertion between selected sentences
//!
//! Extracted sentences read choppily when glued together. The enhancer
//! prefixes some of them with a transition phrase picked from the sentence's
//! own cue words. Choices are random; pass a seeded RNG for reproducible
//! output.

use crate::types::ADDITIVE_TRANSITION_PROBABILITY;
use rand::seq::SliceRandom;
use rand::Rng;

/// Transitions for sentences that continue the previous thought
pub const ADDITIVE_TRANSITIONS: [&str; 3] = ["Additionally", "Furthermore", "Moreover"];

/// Transitions for sentences that push back on the previous one
pub const CONTRAST_TRANSITIONS: [&str; 3] = ["However", "In contrast", "On the other hand"];

/// Transitions for sentences that state a consequence
pub const CAUSAL_TRANSITIONS: [&str; 3] = ["Therefore", "As a result", "Consequently"];

const CONTRAST_CUES: [&str; 5] = ["but", "however", "although", "yet", "despite"];
const CAUSAL_CUES: [&str; 4] = ["therefore", "thus", "hence", "so"];

/// How a sentence relates to the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Contrast,
    Cause,
    Addition,
}

impl Relation {
    /// Classify a sentence by its cue words
    ///
    /// Cues are matched as substrings of the lowercased sentence, so "also"
    /// counts as "so". Contrast wins over cause; anything else is an addition.
    pub fn classify(sentence: &str) -> Self {
        let lowered = sentence.to_lowercase();

        if CONTRAST_CUES.iter().any(|cue| lowered.contains(cue)) {
            Relation::Contrast
        } else if CAUSAL_CUES.iter().any(|cue| lowered.contains(cue)) {
            Relation::Cause
        } else {
            Relation::Addition
        }
    }

    /// Candidate transition phrases for this relation
    pub fn transitions(&self) -> &'static [&'static str] {
        match self {
            Relation::Contrast => &CONTRAST_TRANSITIONS,
            Relation::Cause => &CAUSAL_TRANSITIONS,
            Relation::Addition => &ADDITIVE_TRANSITIONS,
        }
    }
}

/// Check if a sentence already opens with one of the known transitions
pub fn starts_with_transition(sentence: &str) -> bool {
    ADDITIVE_TRANSITIONS
        .iter()
        .chain(CONTRAST_TRANSITIONS.iter())
        .chain(CAUSAL_TRANSITIONS.iter())
        .any(|t| sentence.starts_with(t))
}

/// Inserts transition phrases between consecutive sentences
#[derive(Debug, Clone)]
pub struct CoherenceEnhancer {
    additive_probability: f64,
}

impl Default for CoherenceEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl CoherenceEnhancer {
    /// Create an enhancer with the default additive probability (0.3)
    pub fn new() -> Self {
        Self {
            additive_probability: ADDITIVE_TRANSITION_PROBABILITY,
        }
    }

    /// Set the chance of adding a transition to a sentence with no cue words
    pub fn with_additive_probability(mut self, probability: f64) -> Self {
        self.additive_probability = probability;
        self
    }

    /// Return `sentences` with transitions inserted
    ///
    /// The first sentence is never modified.
    pub fn enhance<R, S>(&self, sentences: &[S], rng: &mut R) -> Vec<String>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        let mut enhanced = Vec::with_capacity(sentences.len());
        for (i, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            if i == 0 || starts_with_transition(sentence) {
                enhanced.push(sentence.to_string());
                continue;
            }

            let relation = Relation::classify(sentence);
            let add = match relation {
                Relation::Contrast | Relation::Cause => true,
                Relation::Addition => rng.gen::<f64>() < self.additive_probability,
            };

            let transition = if add {
                relation.transitions().choose(rng)
            } else {
                None
            };

            match transition {
                Some(transition) => enhanced.push(format!("{}, {}", transition, sentence)),
                None => enhanced.push(sentence.to_string()),
            }
        }
        enhanced
    }
}

//! Standard PageRank algorithm
//!
//! Classic power iteration with weighted edges and uniform redistribution of
//! dangling-node mass. Iteration stops once the L1 change of the score vector
//! drops below `threshold * N`, or after `max_iterations` rounds.

use super::PageRankResult;
use crate::graph::matrix::SimilarityMatrix;
use crate::types::{DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS};

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Per-node convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threshold: DEFAULT_CONVERGENCE_THRESHOLD,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a similarity matrix
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &SimilarityMatrix) -> PageRankResult {
        let n = graph.size();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let uniform = 1.0 / n as f64;
        let mut scores = vec![uniform; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) * uniform;
        let tolerance = self.threshold * n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= tolerance {
            iterations += 1;

            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass * uniform);

            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.row_total(node);
                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node) {
                        new_scores[neighbor] += self.damping * node_score * weight / total_weight;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta < tolerance)
    }
}

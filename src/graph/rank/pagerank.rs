// src/graph/rank/pagerank.rs
//! `PageRank` power iteration over a [`TransitionModel`].

use tracing::{debug, warn};

use super::transition::TransitionModel;
use crate::config::{RankConfig, StartVector};
use crate::error::{LinkRankError, Result};

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOutcome {
    /// Score per page, indexed by page identity.
    pub scores: Vec<f64>,
    /// Update steps performed.
    pub iterations: usize,
    /// Largest per-component change in the last step.
    pub delta: f64,
    pub converged: bool,
}

/// Power-iteration solver.
#[derive(Debug, Clone)]
pub struct Solver {
    pub epsilon: f64,
    pub min_iterations: usize,
    pub max_iterations: usize,
    /// Fail instead of returning an unconverged vector.
    pub strict: bool,
    /// Graphs at least this large step in parallel.
    pub parallel_threshold: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl Solver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            epsilon: config.epsilon,
            min_iterations: config.min_iterations,
            max_iterations: config.max_iterations,
            strict: config.strict,
            parallel_threshold: config.parallel_threshold,
        }
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_min_iterations(mut self, min_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Iterates `model` from `start` until two successive vectors agree within
    /// `epsilon` in every component, after at least `min_iterations` steps.
    ///
    /// Hitting `max_iterations` first yields the last vector with
    /// `converged == false`, or `NotConverged` in strict mode.
    ///
    /// # Errors
    /// Returns error on an empty model, a start vector of the wrong length,
    /// degenerate bounds, or strict non-convergence.
    pub fn solve<M>(&self, model: &M, start: Vec<f64>) -> Result<RankOutcome>
    where
        M: TransitionModel + ?Sized,
    {
        let n = model.size();
        self.validate(n, &start)?;
        let parallel = n >= self.parallel_threshold;

        let mut current = start;
        let mut iterations = 0usize;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.max_iterations {
            let next = model.step(&current, parallel);
            delta = max_abs_diff(&current, &next);
            current = next;
            iterations += 1;

            if delta <= self.epsilon && iterations >= self.min_iterations {
                converged = true;
                break;
            }
        }

        debug!(iterations, delta, converged, parallel, "power iteration finished");
        if !converged {
            if self.strict {
                return Err(LinkRankError::NotConverged { iterations, delta });
            }
            warn!(
                iterations,
                delta, "iteration cap reached before convergence, using last vector"
            );
        }

        Ok(RankOutcome {
            scores: current,
            iterations,
            delta,
            converged,
        })
    }

    fn validate(&self, n: usize, start: &[f64]) -> Result<()> {
        if n == 0 {
            return Err(LinkRankError::EmptyGraph);
        }
        if start.len() != n {
            return Err(LinkRankError::StartVectorSize {
                expected: n,
                actual: start.len(),
            });
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LinkRankError::InvalidThreshold(self.epsilon));
        }
        if self.max_iterations < self.min_iterations {
            return Err(LinkRankError::InvalidIterationBounds {
                min: self.min_iterations,
                max: self.max_iterations,
            });
        }
        Ok(())
    }
}

/// Builds the starting rank vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initial_vector(start: StartVector, n: usize) -> Vec<f64> {
    match start {
        StartVector::Basis => {
            let mut v = vec![0.0; n];
            if let Some(first) = v.first_mut() {
                *first = 1.0;
            }
            v
        }
        StartVector::Uniform if n > 0 => vec![1.0 / n as f64; n],
        StartVector::Uniform => Vec::new(),
    }
}

fn max_abs_diff(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max)
}

// src/graph/rank/transition.rs
//! Row-stochastic transition model with damping, teleportation and dead-end
//! redistribution.
//!
//! For a page with at least one outbound link (a lone self-loop counts), each
//! linked column receives `(1 - alpha) / out_degree` and every column receives
//! `alpha / N` on top. A page with no outbound link spreads `1 / N` over every
//! column.

use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use tracing::debug;

use super::incidence::IncidenceMatrix;
use super::matrix::DenseMatrix;
use super::sparse::SparseTransition;
use crate::error::{LinkRankError, Result};

/// One step of the random surfer: maps the current rank vector to the next.
pub trait TransitionModel: Sync {
    /// Number of pages.
    fn size(&self) -> usize;

    /// Computes `new[i] = sum_j old[j] * T[j][i]` for every `i`.
    fn step(&self, old: &[f64], parallel: bool) -> Vec<f64>;
}

/// Evaluates `component` for `0..n`, across the rayon pool when `parallel`.
pub(crate) fn collect_components<F>(n: usize, parallel: bool, component: F) -> Vec<f64>
where
    F: Fn(usize) -> f64 + Sync + Send,
{
    if parallel {
        (0..n).into_par_iter().map(component).collect()
    } else {
        (0..n).map(component).collect()
    }
}

/// Validated parameters for building a transition model.
#[derive(Debug, Clone, Copy)]
pub struct TransitionBuilder {
    alpha: f64,
    size: usize,
}

impl TransitionBuilder {
    /// # Errors
    /// Returns `EmptyGraph` for `size == 0` and `InvalidDamping` unless `0 < alpha < 1`.
    pub fn new(alpha: f64, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LinkRankError::EmptyGraph);
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(LinkRankError::InvalidDamping(alpha));
        }
        Ok(Self { alpha, size })
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Materializes the full N x N matrix.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if the incidence matrix is not N x N.
    #[allow(clippy::cast_precision_loss)]
    pub fn dense(&self, incidence: &IncidenceMatrix) -> Result<TransitionMatrix> {
        if incidence.size() != self.size {
            return Err(LinkRankError::DimensionMismatch {
                expected: self.size,
                actual: incidence.size(),
            });
        }
        let n = self.size;
        let teleport = self.alpha / n as f64;
        let follow = 1.0 - self.alpha;
        let dead_end = 1.0 / n as f64;

        let mut matrix = DenseMatrix::zeros(n);
        let mut dead_ends = 0usize;
        for i in 0..n {
            let out_degree = incidence.out_degree(i);
            let row = matrix.row_mut(i);
            if out_degree == 0 {
                row.fill(dead_end);
                dead_ends += 1;
                continue;
            }
            let share = 1.0 / out_degree as f64;
            for (cell, &linked) in row.iter_mut().zip(incidence.row(i)) {
                let direct = if linked == 1.0 { share } else { 0.0 };
                *cell = direct * follow + teleport;
            }
        }
        debug!(size = n, dead_ends, "dense transition matrix built");
        Ok(TransitionMatrix {
            matrix,
            alpha: self.alpha,
        })
    }

    /// Builds the sparse equivalent straight from `(source, target)` edges.
    ///
    /// # Errors
    /// Returns `MalformedGraph` if an endpoint is outside `0..N`.
    pub fn sparse<I>(&self, edges: I) -> Result<SparseTransition>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        SparseTransition::from_edges(self.size, self.alpha, edges)
    }
}

/// Dense row-stochastic transition matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    matrix: DenseMatrix,
    alpha: f64,
}

impl TransitionMatrix {
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.matrix.at(i, j)
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        self.matrix.row(i)
    }

    #[must_use]
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn as_dense(&self) -> &DenseMatrix {
        &self.matrix
    }
}

impl TransitionModel for TransitionMatrix {
    fn size(&self) -> usize {
        self.matrix.size()
    }

    fn step(&self, old: &[f64], parallel: bool) -> Vec<f64> {
        let n = self.matrix.size();
        collect_components(n, parallel, |i| {
            old.iter()
                .enumerate()
                .map(|(j, &mass)| mass * self.matrix.at(j, i))
                .sum()
        })
    }
}

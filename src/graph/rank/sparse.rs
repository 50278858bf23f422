// src/graph/rank/sparse.rs
//! Sparse transition model.
//!
//! Only real edges are stored, as incoming lists per destination. The uniform
//! teleport and dead-end terms are folded into one per-step base value, so a
//! step costs O(N + E) instead of O(N^2).

use std::collections::HashSet;

use tracing::debug;

use super::transition::{collect_components, TransitionModel};
use crate::error::{LinkRankError, Result};

#[derive(Debug, Clone)]
pub struct SparseTransition {
    size: usize,
    alpha: f64,
    /// `incoming[i]` holds `(source, probability source sends along the edge)`.
    incoming: Vec<Vec<(usize, f64)>>,
    dead_ends: Vec<usize>,
}

impl SparseTransition {
    /// # Errors
    /// Returns `MalformedGraph` if an endpoint is outside `0..size`.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn from_edges<I>(size: usize, alpha: f64, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut outbound: Vec<Vec<usize>> = vec![Vec::new(); size];
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for (source, target) in edges {
            if source >= size || target >= size {
                return Err(LinkRankError::MalformedGraph {
                    page: source,
                    target,
                    size,
                });
            }
            if seen.insert((source, target)) {
                outbound[source].push(target);
            }
        }

        let mut incoming: Vec<Vec<(usize, f64)>> = vec![Vec::new(); size];
        let mut dead_ends = Vec::new();
        for (source, targets) in outbound.iter().enumerate() {
            if targets.is_empty() {
                dead_ends.push(source);
                continue;
            }
            let weight = (1.0 - alpha) / targets.len() as f64;
            for &target in targets {
                incoming[target].push((source, weight));
            }
        }
        for list in &mut incoming {
            list.sort_by_key(|&(source, _)| source);
        }

        debug!(
            size,
            edges = seen.len(),
            dead_ends = dead_ends.len(),
            "sparse transition model built"
        );
        Ok(Self {
            size,
            alpha,
            incoming,
            dead_ends,
        })
    }

    #[must_use]
    pub fn dead_ends(&self) -> &[usize] {
        &self.dead_ends
    }

    /// Probability that `source` moves to `target` in one step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self, source: usize, target: usize) -> f64 {
        let n = self.size as f64;
        if self.dead_ends.binary_search(&source).is_ok() {
            return 1.0 / n;
        }
        let direct = self.incoming[target]
            .iter()
            .find(|&&(s, _)| s == source)
            .map_or(0.0, |&(_, w)| w);
        direct + self.alpha / n
    }
}

impl TransitionModel for SparseTransition {
    fn size(&self) -> usize {
        self.size
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&self, old: &[f64], parallel: bool) -> Vec<f64> {
        let n = self.size as f64;
        let total: f64 = old.iter().sum();
        let dead_mass: f64 = self.dead_ends.iter().map(|&d| old[d]).sum();
        let live_mass = total - dead_mass;
        let base = dead_mass / n + self.alpha * live_mass / n;

        collect_components(self.size, parallel, |i| {
            base + self.incoming[i]
                .iter()
                .map(|&(source, weight)| old[source] * weight)
                .sum::<f64>()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::incidence::IncidenceMatrix;
    use super::super::transition::TransitionBuilder;
    use super::*;

    const EDGES: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 2), (3, 3), (3, 0), (4, 1)];

    #[test]
    fn test_probabilities_match_dense_matrix() {
        let builder = TransitionBuilder::new(0.15, 6).unwrap();
        let inc = IncidenceMatrix::from_edges(6, EDGES.iter().copied()).unwrap();
        let dense = builder.dense(&inc).unwrap();
        let sparse = builder.sparse(EDGES.iter().copied()).unwrap();
        for i in 0..6 {
            for j in 0..6 {
                assert!((dense.at(i, j) - sparse.probability(i, j)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_step_matches_dense_step() {
        let builder = TransitionBuilder::new(0.15, 6).unwrap();
        let inc = IncidenceMatrix::from_edges(6, EDGES.iter().copied()).unwrap();
        let dense = builder.dense(&inc).unwrap();
        let sparse = builder.sparse(EDGES.iter().copied()).unwrap();
        let v = [0.4, 0.1, 0.1, 0.2, 0.1, 0.1];
        let a = dense.step(&v, false);
        let b = sparse.step(&v, true);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_duplicate_edges_counted_once() {
        let sparse = SparseTransition::from_edges(2, 0.15, [(0, 1), (0, 1)]).unwrap();
        assert!((sparse.probability(0, 1) - (0.85 + 0.075)).abs() < 1e-12);
        assert_eq!(sparse.dead_ends(), &[1]);
    }

    #[test]
    fn test_out_of_range_edge_rejected() {
        let err = SparseTransition::from_edges(2, 0.15, [(2, 0)]).unwrap_err();
        assert!(matches!(err, LinkRankError::MalformedGraph { page: 2, .. }));
    }
}

// src/graph/rank/incidence.rs
//! Dense link incidence: cell (i, j) is 1.0 iff page i links to page j.

use tracing::debug;

use super::graph::LinkGraph;
use super::matrix::DenseMatrix;
use crate::error::{LinkRankError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    matrix: DenseMatrix,
}

impl IncidenceMatrix {
    /// Builds the incidence matrix of `graph`.
    ///
    /// # Errors
    /// Returns `MalformedGraph` if an edge points outside `0..N`.
    pub fn from_graph(graph: &LinkGraph) -> Result<Self> {
        Self::from_edges(graph.len(), graph.edges())
    }

    /// Builds an incidence matrix of size `n` from `(source, target)` pairs.
    /// Repeated pairs set the same cell once.
    ///
    /// # Errors
    /// Returns `MalformedGraph` if either endpoint is outside `0..n`.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut matrix = DenseMatrix::zeros(n);
        let mut count = 0usize;
        for (source, target) in edges {
            if source >= n || target >= n {
                return Err(LinkRankError::MalformedGraph {
                    page: source,
                    target,
                    size: n,
                });
            }
            matrix.set(source, target, 1.0);
            count += 1;
        }
        debug!(size = n, edges = count, "incidence matrix built");
        Ok(Self { matrix })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.matrix.at(i, j)
    }

    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        self.matrix.row(i)
    }

    /// Number of 1.0 cells in row `i`.
    #[must_use]
    pub fn out_degree(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&c| c == 1.0).count()
    }

    #[must_use]
    pub fn as_dense(&self) -> &DenseMatrix {
        &self.matrix
    }
}

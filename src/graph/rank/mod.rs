pub mod builder;
pub mod graph;
pub mod incidence;
pub mod matrix;
pub mod pagerank;
pub mod queries;
pub mod sparse;
pub mod transition;

pub use graph::LinkGraph;
pub use pagerank::{RankOutcome, Solver};

use tracing::{info, warn};

use crate::config::{DebugConfig, RankConfig, Representation};
use crate::error::Result;
use incidence::IncidenceMatrix;
use transition::TransitionBuilder;

pub const INCIDENCE_DUMP: &str = "incidence_matrix.txt";
pub const TRANSITION_DUMP: &str = "transition_matrix.txt";

/// Orchestrates incidence, transition and solver stages.
pub struct RankEngine {
    config: RankConfig,
    debug: DebugConfig,
}

impl RankEngine {
    #[must_use]
    pub fn new(config: RankConfig) -> Self {
        Self {
            config,
            debug: DebugConfig::default(),
        }
    }

    #[must_use]
    pub fn with_debug(mut self, debug: DebugConfig) -> Self {
        self.debug = debug;
        self
    }

    /// Computes the rank vector of `graph` without touching it.
    ///
    /// # Errors
    /// Returns error on degenerate parameters, a malformed graph, a failed
    /// matrix dump, or strict non-convergence.
    pub fn compute(&self, graph: &LinkGraph) -> Result<RankOutcome> {
        self.config.validate()?;
        let n = graph.len();
        let builder = TransitionBuilder::new(self.config.alpha, n)?;
        let solver = Solver::from_config(&self.config);
        let start = pagerank::initial_vector(self.config.start, n);

        let representation = self.config.representation_for(n);
        info!(pages = n, edges = graph.edge_count(), ?representation, "computing ranks");

        let outcome = match representation {
            Representation::Sparse => {
                if self.debug.dump_matrices {
                    warn!("matrix dumps are only written for the dense representation");
                }
                let model = builder.sparse(graph.edges())?;
                solver.solve(&model, start)?
            }
            Representation::Dense | Representation::Auto => {
                let incidence = IncidenceMatrix::from_graph(graph)?;
                let model = builder.dense(&incidence)?;
                if self.debug.dump_matrices {
                    self.dump(&incidence, &model)?;
                }
                solver.solve(&model, start)?
            }
        };

        info!(
            iterations = outcome.iterations,
            delta = outcome.delta,
            converged = outcome.converged,
            "ranks computed"
        );
        Ok(outcome)
    }

    /// Computes ranks and stores them on the pages.
    ///
    /// # Errors
    /// See [`RankEngine::compute`].
    pub fn rank(&self, graph: &mut LinkGraph) -> Result<RankOutcome> {
        let outcome = self.compute(graph)?;
        graph.apply_ranks(&outcome.scores);
        Ok(outcome)
    }

    fn dump(
        &self,
        incidence: &IncidenceMatrix,
        transition: &transition::TransitionMatrix,
    ) -> Result<()> {
        let dir = &self.debug.dump_dir;
        std::fs::create_dir_all(dir).map_err(|e| crate::error::LinkRankError::io(e, dir))?;
        incidence.as_dense().write_to(&dir.join(INCIDENCE_DUMP))?;
        transition.as_dense().write_to(&dir.join(TRANSITION_DUMP))?;
        info!(dir = %dir.display(), "matrix dumps written");
        Ok(())
    }
}

// tests/unit_rank.rs
//! Solver and engine behaviour on small hand-built graphs.

use linkrank_core::config::{DebugConfig, RankConfig, Representation, StartVector};
use linkrank_core::error::LinkRankError;
use linkrank_core::graph::rank::incidence::IncidenceMatrix;
use linkrank_core::graph::rank::pagerank::{initial_vector, Solver};
use linkrank_core::graph::rank::transition::TransitionBuilder;
use linkrank_core::graph::{LinkGraph, RankEngine};

// --- Helpers ---

fn graph(n: usize, edges: &[(usize, usize)]) -> LinkGraph {
    let mut g = LinkGraph::new();
    for i in 0..n {
        g.add_page(&format!("http://site/{i}"), &format!("Page {i}"), None);
    }
    for &(from, to) in edges {
        assert!(g.add_link(from, &format!("http://site/{to}"), ""));
    }
    g
}

fn config(representation: Representation) -> RankConfig {
    RankConfig {
        representation,
        ..RankConfig::default()
    }
}

// --- Scenarios ---

#[test]
fn test_three_node_dead_end_scenario() {
    let mut g = graph(3, &[(0, 1), (0, 2), (1, 2)]);

    let inc = IncidenceMatrix::from_graph(&g).unwrap();
    let t = TransitionBuilder::new(0.15, 3).unwrap().dense(&inc).unwrap();
    let third = 1.0 / 3.0;
    assert_eq!(t.row(2), &[third, third, third]);

    let outcome = RankEngine::new(RankConfig::default()).rank(&mut g).unwrap();
    assert!(outcome.converged);
    let s = &outcome.scores;
    assert!(s[2] > s[1], "node 2 should outrank node 1: {s:?}");
    assert!(s[1] > s[0], "node 1 should outrank node 0: {s:?}");

    let ranked: Vec<_> = g.ranked_pages().into_iter().map(|(id, _)| id).collect();
    assert_eq!(ranked, vec![2, 1, 0]);
    assert!((g.page(2).unwrap().rank() - s[2]).abs() < f64::EPSILON);
}

#[test]
fn test_two_node_cycle_converges_to_half() {
    let g = graph(2, &[(0, 1), (1, 0)]);
    let outcome = RankEngine::new(RankConfig::default()).compute(&g).unwrap();
    assert!(outcome.converged);
    assert!(outcome.iterations >= 5 && outcome.iterations < 100);
    for score in &outcome.scores {
        assert!((score - 0.5).abs() <= 1e-5, "{score}");
    }
}

#[test]
fn test_scores_sum_to_one_and_non_negative() {
    let g = graph(6, &[(0, 1), (1, 2), (2, 0), (3, 3), (4, 0), (4, 5)]);
    let outcome = RankEngine::new(RankConfig::default()).compute(&g).unwrap();
    let total: f64 = outcome.scores.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert!(outcome.scores.iter().all(|&s| s >= 0.0));
}

#[test]
fn test_minimum_iterations_on_already_stationary_start() {
    // Symmetric cycle: the uniform vector is already the fixed point.
    let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    let rank = RankConfig {
        start: StartVector::Uniform,
        min_iterations: 7,
        ..RankConfig::default()
    };
    let outcome = RankEngine::new(rank).compute(&g).unwrap();
    assert!(outcome.converged);
    assert_eq!(outcome.iterations, 7);
}

#[test]
fn test_dense_and_sparse_agree() {
    let edges = [(0, 1), (0, 2), (1, 2), (2, 3), (3, 3), (5, 0), (5, 4), (6, 6)];
    let g = graph(8, &edges);
    let dense = RankEngine::new(config(Representation::Dense))
        .compute(&g)
        .unwrap();
    let sparse = RankEngine::new(config(Representation::Sparse))
        .compute(&g)
        .unwrap();
    for (a, b) in dense.scores.iter().zip(&sparse.scores) {
        assert!((a - b).abs() < 1e-9, "{a} vs {b}");
    }
}

#[test]
fn test_parallel_solver_matches_sequential() {
    let edges: Vec<_> = (0..300).map(|i| (i, (i * 7 + 3) % 300)).collect();
    let g = graph(300, &edges);
    let inc = IncidenceMatrix::from_graph(&g).unwrap();
    let t = TransitionBuilder::new(0.15, 300).unwrap().dense(&inc).unwrap();
    let start = initial_vector(StartVector::Basis, 300);

    let seq = Solver::new()
        .with_parallel_threshold(usize::MAX)
        .solve(&t, start.clone())
        .unwrap();
    let par = Solver::new().with_parallel_threshold(1).solve(&t, start).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_rerun_from_converged_vector_is_idempotent() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
    let first = RankEngine::new(RankConfig::default()).compute(&g).unwrap();

    let inc = IncidenceMatrix::from_graph(&g).unwrap();
    let t = TransitionBuilder::new(0.15, 4).unwrap().dense(&inc).unwrap();
    let epsilon = RankConfig::default().epsilon;
    let again = Solver::new()
        .with_min_iterations(1)
        .solve(&t, first.scores.clone())
        .unwrap();
    for (a, b) in first.scores.iter().zip(&again.scores) {
        assert!((a - b).abs() <= epsilon);
    }
}

#[test]
fn test_empty_graph_rejected() {
    let err = RankEngine::new(RankConfig::default())
        .compute(&LinkGraph::new())
        .unwrap_err();
    assert!(matches!(err, LinkRankError::EmptyGraph));
}

#[test]
fn test_invalid_config_rejected_before_building() {
    let g = graph(2, &[(0, 1)]);
    let rank = RankConfig {
        alpha: 1.0,
        ..RankConfig::default()
    };
    assert!(matches!(
        RankEngine::new(rank).compute(&g),
        Err(LinkRankError::InvalidDamping(_))
    ));

    let rank = RankConfig {
        min_iterations: 10,
        max_iterations: 5,
        ..RankConfig::default()
    };
    assert!(matches!(
        RankEngine::new(rank).compute(&g),
        Err(LinkRankError::InvalidIterationBounds { min: 10, max: 5 })
    ));
}

#[test]
fn test_strict_mode_surfaces_non_convergence() {
    let g = graph(2, &[(0, 1), (1, 0)]);
    let rank = RankConfig {
        min_iterations: 1,
        max_iterations: 4,
        strict: true,
        ..RankConfig::default()
    };
    assert!(matches!(
        RankEngine::new(rank).compute(&g),
        Err(LinkRankError::NotConverged { iterations: 4, .. })
    ));
}

#[test]
fn test_matrix_dumps_written() {
    let dir = tempfile::tempdir().unwrap();
    let g = graph(2, &[(0, 1)]);
    let debug = DebugConfig {
        dump_matrices: true,
        dump_dir: dir.path().to_path_buf(),
    };
    RankEngine::new(config(Representation::Dense))
        .with_debug(debug)
        .compute(&g)
        .unwrap();

    let incidence = std::fs::read_to_string(dir.path().join("incidence_matrix.txt")).unwrap();
    assert_eq!(incidence, "0  1\n0  0\n");
    let transition = std::fs::read_to_string(dir.path().join("transition_matrix.txt")).unwrap();
    assert_eq!(transition.lines().count(), 2);
    assert_eq!(transition.lines().nth(1), Some("0.5  0.5"));
}

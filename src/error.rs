// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("page {page} links to unknown page {target} (graph has {size} pages)")]
    MalformedGraph {
        page: usize,
        target: usize,
        size: usize,
    },

    #[error("cannot rank an empty graph")]
    EmptyGraph,

    #[error("damping factor {0} must lie strictly between 0 and 1")]
    InvalidDamping(f64),

    #[error("convergence threshold {0} must be positive and finite")]
    InvalidThreshold(f64),

    #[error("iteration cap {max} is below the minimum iteration count {min}")]
    InvalidIterationBounds { min: usize, max: usize },

    #[error("incidence matrix has {actual} rows, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("start vector has {actual} entries, expected {expected}")]
    StartVectorSize { expected: usize, actual: usize },

    #[error("rank vector did not converge within {iterations} iterations (delta {delta:e})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("malformed metadata record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("invalid crawl manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("invalid config file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, LinkRankError>;

// Allow `?` on std::io::Error by converting to LinkRankError::Io with unknown path.
impl From<std::io::Error> for LinkRankError {
    fn from(source: std::io::Error) -> Self {
        LinkRankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl LinkRankError {
    /// Wraps an I/O error with the path that produced it.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        LinkRankError::Io {
            source,
            path: path.into(),
        }
    }
}

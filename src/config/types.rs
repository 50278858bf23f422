use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::text::StopWords;

/// Which vector the solver starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartVector {
    /// 1.0 at page 0, 0.0 elsewhere.
    #[default]
    Basis,
    /// 1/N everywhere.
    Uniform,
}

/// How the transition model is stored during iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Dense below `dense_limit` pages, sparse above.
    #[default]
    Auto,
    Dense,
    Sparse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Teleport probability per step.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    #[serde(default = "default_min_iterations")]
    pub min_iterations: usize,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Fail instead of warning when `max_iterations` is reached.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub start: StartVector,
    #[serde(default)]
    pub representation: Representation,
    #[serde(default = "default_dense_limit")]
    pub dense_limit: usize,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            epsilon: default_epsilon(),
            min_iterations: default_min_iterations(),
            max_iterations: default_max_iterations(),
            strict: false,
            start: StartVector::default(),
            representation: Representation::default(),
            dense_limit: default_dense_limit(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl RankConfig {
    /// Resolves `Auto` against the graph size.
    #[must_use]
    pub fn representation_for(&self, pages: usize) -> Representation {
        match self.representation {
            Representation::Auto if pages > self.dense_limit => Representation::Sparse,
            Representation::Auto => Representation::Dense,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Replaces the built-in stopword list when set.
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            metadata_path: default_metadata_path(),
            pages_dir: default_pages_dir(),
            result_limit: default_result_limit(),
            stopwords: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl IndexConfig {
    #[must_use]
    pub fn stopwords(&self) -> StopWords {
        let mut set = match &self.stopwords {
            Some(list) => StopWords::from_list(list),
            None => StopWords::default(),
        };
        set.extend(&self.extra_stopwords);
        set
    }
}

/// Which link targets count as in-scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeConfig {
    #[serde(default)]
    pub url_prefix: Option<String>,
    #[serde(default)]
    pub excluded_segments: Vec<String>,
}

impl ScopeConfig {
    #[must_use]
    pub fn admits(&self, url: &str) -> bool {
        if let Some(prefix) = &self.url_prefix {
            if !url.starts_with(prefix.as_str()) {
                return false;
            }
        }
        !self
            .excluded_segments
            .iter()
            .any(|seg| url.contains(seg.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    #[serde(default)]
    pub dump_matrices: bool,
    #[serde(default = "default_dump_dir")]
    pub dump_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            dump_matrices: false,
            dump_dir: default_dump_dir(),
        }
    }
}

const fn default_alpha() -> f64 { 0.15 }
const fn default_epsilon() -> f64 { 1e-5 }
const fn default_min_iterations() -> usize { 5 }
const fn default_max_iterations() -> usize { 1000 }
const fn default_dense_limit() -> usize { 2048 }
const fn default_parallel_threshold() -> usize { 256 }
const fn default_result_limit() -> usize { 10 }

fn default_metadata_path() -> PathBuf { PathBuf::from("metadata") }
fn default_pages_dir() -> PathBuf { PathBuf::from("pages") }
fn default_dump_dir() -> PathBuf { PathBuf::from(".") }

/// On-disk layout of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub scope: ScopeConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rank: RankConfig,
    pub index: IndexConfig,
    pub scope: ScopeConfig,
    pub debug: DebugConfig,
    pub verbose: bool,
}

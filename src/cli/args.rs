use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank", version, about = "PageRank over a crawled link graph")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Only log errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
    /// Config file to use instead of ./linkrank.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the pages of a crawl manifest and write the metadata file
    Rank(RankArgs),
    /// Search the metadata file for pages whose incoming anchors match
    Query {
        /// Query terms
        #[arg(required = true)]
        terms: Vec<String>,
        #[arg(long, short)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
        #[arg(long, value_name = "FILE")]
        metadata: Option<PathBuf>,
    },
    /// Interactive search prompt (enter ZZZ to quit)
    Search {
        #[arg(long, short)]
        limit: Option<usize>,
        #[arg(long, value_name = "FILE")]
        metadata: Option<PathBuf>,
    },
    /// List the highest ranked pages
    Top {
        #[arg(long, short, default_value = "10")]
        limit: usize,
        #[arg(long)]
        json: bool,
        #[arg(long, value_name = "FILE")]
        metadata: Option<PathBuf>,
    },
}

/// Arguments for the Rank command; each set flag overrides `linkrank.toml`.
#[allow(clippy::struct_excessive_bools)]
#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// JSON crawl manifest
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,
    /// Metadata file to write
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Teleport probability
    #[arg(long)]
    pub alpha: Option<f64>,
    /// Convergence threshold
    #[arg(long)]
    pub epsilon: Option<f64>,
    #[arg(long)]
    pub min_iterations: Option<usize>,
    #[arg(long)]
    pub max_iterations: Option<usize>,
    /// Fail if the iteration cap is reached
    #[arg(long)]
    pub strict: bool,
    /// Start from 1/N everywhere instead of page 0
    #[arg(long)]
    pub uniform_start: bool,
    #[arg(long, conflicts_with = "dense")]
    pub sparse: bool,
    #[arg(long)]
    pub dense: bool,
    /// Write incidence and transition matrices
    #[arg(long)]
    pub dump_matrices: bool,
}

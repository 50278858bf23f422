// src/cli/handlers/mod.rs
//! Command handlers.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::args::RankArgs;
use crate::config::{Config, Representation, StartVector};
use crate::error::LinkRankError;
use crate::exit::LinkRankExit;
use crate::graph::rank::builder;
use crate::graph::{CrawlManifest, LinkGraph, RankEngine};
use crate::metadata;
use crate::query::{self, Index, SearchResult, Snippets};

pub mod rank_report;
pub mod search_report;

/// Typing this at the search prompt ends the session.
pub const QUIT_COMMAND: &str = "ZZZ";

/// Applies command-line overrides on top of the loaded config.
pub fn apply_rank_overrides(config: &mut Config, args: &RankArgs) {
    let rank = &mut config.rank;
    if let Some(alpha) = args.alpha {
        rank.alpha = alpha;
    }
    if let Some(epsilon) = args.epsilon {
        rank.epsilon = epsilon;
    }
    if let Some(min) = args.min_iterations {
        rank.min_iterations = min;
    }
    if let Some(max) = args.max_iterations {
        rank.max_iterations = max;
    }
    if args.strict {
        rank.strict = true;
    }
    if args.uniform_start {
        rank.start = StartVector::Uniform;
    }
    if args.sparse {
        rank.representation = Representation::Sparse;
    } else if args.dense {
        rank.representation = Representation::Dense;
    }
    if args.dump_matrices {
        config.debug.dump_matrices = true;
    }
    if let Some(output) = &args.output {
        config.index.metadata_path.clone_from(output);
    }
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the manifest cannot be loaded, ranking fails, or output cannot be written.
pub fn handle_rank(args: &RankArgs, mut config: Config) -> Result<LinkRankExit> {
    apply_rank_overrides(&mut config, args);
    config.rank.validate()?;

    let manifest = CrawlManifest::from_path(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    let stopwords = config.index.stopwords();
    let (mut graph, stats) = builder::build_graph(&manifest, &config.scope, &stopwords);
    if graph.is_empty() {
        return Err(LinkRankError::EmptyGraph.into());
    }

    let engine = RankEngine::new(config.rank.clone()).with_debug(config.debug.clone());
    let outcome = engine.rank(&mut graph)?;

    save_snapshots(&graph, &config.index.pages_dir)?;
    let output = &config.index.metadata_path;
    metadata::write_metadata(output, &graph)?;

    rank_report::print(&graph, &stats, &outcome, output);
    Ok(LinkRankExit::Success)
}

/// Writes one snapshot per page. Pages without content get an empty file,
/// replacing whatever an earlier run left under the same id.
fn save_snapshots(graph: &LinkGraph, pages_dir: &Path) -> Result<()> {
    for page in graph.pages() {
        query::save_snapshot(pages_dir, page.id(), page.content().unwrap_or(""))?;
    }
    info!(saved = graph.len(), dir = %pages_dir.display(), "page snapshots written");
    Ok(())
}

fn open_index(config: &Config, metadata: Option<&PathBuf>) -> Result<Index> {
    let path = metadata.unwrap_or(&config.index.metadata_path);
    let index = Index::load(path, config.index.stopwords())
        .with_context(|| format!("Failed to read metadata {}", path.display()))?;
    let total = index.total_rank();
    if !index.is_empty() && (total - 1.0).abs() > 1e-3 {
        warn!(total, "rank scores do not sum to 1");
    }
    Ok(index)
}

/// Handles the query command.
///
/// # Errors
/// Returns error if the metadata file cannot be read or JSON output fails.
pub fn handle_query(
    terms: &[String],
    limit: Option<usize>,
    json: bool,
    metadata: Option<&PathBuf>,
    config: &Config,
) -> Result<LinkRankExit> {
    let index = open_index(config, metadata)?;
    let snippets = Snippets::new(&config.index.pages_dir)?;
    let limit = limit.unwrap_or(config.index.result_limit);
    let result = index.search(&terms.join(" "), limit);

    if json {
        let records = match &result {
            SearchResult::Hits { records, .. } => records.clone(),
            _ => Vec::new(),
        };
        let hits = search_report::with_snippets(&records, &snippets);
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        print!("{}", search_report::render(&result, &snippets));
    }

    Ok(match result {
        SearchResult::Hits { records, .. } if !records.is_empty() => LinkRankExit::Success,
        SearchResult::Blank => LinkRankExit::InvalidInput,
        _ => LinkRankExit::NoResults,
    })
}

/// Handles the top command.
///
/// # Errors
/// Returns error if the metadata file cannot be read or JSON output fails.
pub fn handle_top(
    limit: usize,
    json: bool,
    metadata: Option<&PathBuf>,
    config: &Config,
) -> Result<LinkRankExit> {
    let index = open_index(config, metadata)?;
    let top = index.top(limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
    } else {
        print!("{}", search_report::render_listing(&top));
    }
    Ok(LinkRankExit::Success)
}

/// Handles the interactive search command on stdin/stdout.
///
/// # Errors
/// Returns error if the metadata file cannot be read or the terminal fails.
pub fn handle_search(
    limit: Option<usize>,
    metadata: Option<&PathBuf>,
    config: &Config,
) -> Result<LinkRankExit> {
    let index = open_index(config, metadata)?;
    let snippets = Snippets::new(&config.index.pages_dir)?;
    let limit = limit.unwrap_or(config.index.result_limit);

    println!("{}", "*".repeat(30));
    println!("{}", "***   linkrank search    ***".bold());
    println!("{}", "*".repeat(30));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    search_loop(&index, &snippets, limit, stdin.lock(), stdout.lock())?;
    Ok(LinkRankExit::Success)
}

/// Prompts, reads one query per line, and prints results until EOF or
/// [`QUIT_COMMAND`]. Returns the number of queries answered.
///
/// # Errors
/// Returns error if reading input or writing output fails.
pub fn search_loop<R: BufRead, W: Write>(
    index: &Index,
    snippets: &Snippets,
    limit: usize,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut answered = 0usize;
    let mut lines = input.lines();
    loop {
        write!(output, "\nEnter a search: ")?;
        output.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let query = line.trim();
        if query == QUIT_COMMAND {
            break;
        }
        let result = index.search(query, limit);
        if result == SearchResult::Blank {
            continue;
        }
        write!(output, "{}", search_report::render(&result, snippets))?;
        answered += 1;
    }
    writeln!(output)?;
    Ok(answered)
}

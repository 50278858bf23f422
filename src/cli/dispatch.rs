//! Routes parsed subcommands to their handlers.

use super::{args::Commands, handlers};
use crate::config::Config;
use crate::exit::LinkRankExit;
use anyhow::Result;
use std::path::Path;

/// Loads the config file, falling back to `./linkrank.toml`.
///
/// # Errors
/// Returns error if the config file exists but is malformed.
pub fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    config.verbose = verbose;
    Ok(config)
}

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, config: Config) -> Result<LinkRankExit> {
    match command {
        Commands::Rank(args) => handlers::handle_rank(&args, config),
        Commands::Query {
            terms,
            limit,
            json,
            metadata,
        } => handlers::handle_query(&terms, limit, json, metadata.as_ref(), &config),
        Commands::Search { limit, metadata } => {
            handlers::handle_search(limit, metadata.as_ref(), &config)
        }
        Commands::Top {
            limit,
            json,
            metadata,
        } => handlers::handle_top(limit, json, metadata.as_ref(), &config),
    }
}

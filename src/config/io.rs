// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::{Config, LinkRankToml};
use crate::error::{LinkRankError, Result};

pub const CONFIG_FILE: &str = "linkrank.toml";

/// Reads and applies a toml file. A missing file leaves `config` untouched.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(config: &mut Config, path: &Path) -> Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(());
    }
    let content = fs::read_to_string(path).map_err(|e| LinkRankError::io(e, path))?;
    parse_toml(config, &content).map_err(|message| LinkRankError::Config {
        path: path.to_path_buf(),
        message,
    })?;
    debug!(path = %path.display(), "loaded config file");
    Ok(())
}

/// Parses toml text into `config`, keeping the non-file fields.
///
/// # Errors
/// Returns the toml parser's message on failure.
pub fn parse_toml(config: &mut Config, content: &str) -> std::result::Result<(), String> {
    let parsed: LinkRankToml = toml::from_str(content).map_err(|e| e.to_string())?;
    config.rank = parsed.rank;
    config.index = parsed.index;
    config.scope = parsed.scope;
    config.debug = parsed.debug;
    Ok(())
}

/// Writes the file-backed part of `config` to `path`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let doc = LinkRankToml {
        rank: config.rank.clone(),
        index: config.index.clone(),
        scope: config.scope.clone(),
        debug: config.debug.clone(),
    };
    let content = toml::to_string_pretty(&doc).map_err(|e| LinkRankError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, content).map_err(|e| LinkRankError::io(e, path))
}

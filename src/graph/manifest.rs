// src/graph/manifest.rs
//! Crawl output as handed over by the crawler.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{LinkRankError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlManifest {
    #[serde(default)]
    pub pages: Vec<CrawledPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawledPage {
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Raw HTML, kept for snippets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub links: Vec<CrawledLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawledLink {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl CrawlManifest {
    /// Reads a JSON manifest from disk.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not a valid manifest.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LinkRankError::io(e, path))?;
        Self::parse(&content)
    }

    /// Parses a JSON manifest.
    ///
    /// # Errors
    /// Returns error if the text is not a valid manifest.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

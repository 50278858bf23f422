// src/metadata.rs
//! The per-page metadata file shared between ranking and querying.
//!
//! One UTF-8 line per page, tab-separated:
//! `id \t title \t rank \t term1,term2,...`

use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{LinkRankError, Result};
use crate::graph::{LinkGraph, Page, PageId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    pub id: PageId,
    pub title: String,
    pub rank: f64,
    pub terms: Vec<String>,
}

impl MetadataRecord {
    /// Snapshot of a ranked page. Field separators inside the title or terms
    /// are replaced so the line stays parseable.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        Self {
            id: page.id(),
            title: clean_field(page.display_title()),
            rank: page.rank(),
            terms: page
                .incoming_terms()
                .iter()
                .map(|t| t.replace(',', ""))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.id,
            self.title,
            self.rank,
            self.terms.join(",")
        )
    }

    /// Parses one line. `line_no` is 1-based and only used for errors.
    ///
    /// # Errors
    /// Returns `MalformedRecord` unless the line has four fields with a valid id and rank.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let malformed = |reason: String| LinkRankError::MalformedRecord {
            line: line_no,
            reason,
        };

        let fields: Vec<&str> = line.trim_end_matches(['\n', '\r']).split('\t').collect();
        let [id, title, rank, terms] = fields.as_slice() else {
            return Err(malformed(format!("expected 4 fields, found {}", fields.len())));
        };

        let id = id
            .parse::<PageId>()
            .map_err(|e| malformed(format!("bad id {id:?}: {e}")))?;
        let rank = rank
            .parse::<f64>()
            .map_err(|e| malformed(format!("bad rank {rank:?}: {e}")))?;
        let terms = if terms.is_empty() {
            Vec::new()
        } else {
            terms.split(',').map(str::to_string).collect()
        };

        Ok(Self {
            id,
            title: (*title).to_string(),
            rank,
            terms,
        })
    }
}

fn clean_field(value: &str) -> String {
    value
        .chars()
        .map(|c| if matches!(c, '\t' | '\n' | '\r') { ' ' } else { c })
        .collect()
}

/// One record per page, in identity order.
#[must_use]
pub fn records(graph: &LinkGraph) -> Vec<MetadataRecord> {
    graph.pages().iter().map(MetadataRecord::from_page).collect()
}

#[must_use]
pub fn render(records: &[MetadataRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", record.to_line());
    }
    out
}

/// Writes the metadata file for a ranked graph. Returns the record count.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn write_metadata(path: &Path, graph: &LinkGraph) -> Result<usize> {
    let records = records(graph);
    write_records(path, &records)?;
    Ok(records.len())
}

/// # Errors
/// Returns error if the file cannot be written.
pub fn write_records(path: &Path, records: &[MetadataRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LinkRankError::io(e, parent))?;
    }
    fs::write(path, render(records)).map_err(|e| LinkRankError::io(e, path))?;
    info!(path = %path.display(), records = records.len(), "metadata written");
    Ok(())
}

/// # Errors
/// Returns error if the file cannot be read or a line is malformed.
pub fn read_metadata(path: &Path) -> Result<Vec<MetadataRecord>> {
    let content = fs::read_to_string(path).map_err(|e| LinkRankError::io(e, path))?;
    let records = parse_metadata(&content)?;
    debug!(path = %path.display(), records = records.len(), "metadata read");
    Ok(records)
}

/// Parses metadata text, skipping blank lines.
///
/// # Errors
/// Returns `MalformedRecord` for the first bad line.
pub fn parse_metadata(content: &str) -> Result<Vec<MetadataRecord>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| MetadataRecord::parse_line(line, idx + 1))
        .collect()
}

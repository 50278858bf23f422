// src/cli/handlers/search_report.rs
//! Query result formatting.

use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;
use tracing::warn;

use crate::metadata::MetadataRecord;
use crate::query::{SearchResult, Snippets};

#[derive(Debug, Serialize)]
pub struct QueryHit<'a> {
    #[serde(flatten)]
    pub record: &'a MetadataRecord,
    pub snippet: String,
}

/// Pairs each record with its snippet, falling back to the title.
#[must_use]
pub fn with_snippets<'a>(records: &[&'a MetadataRecord], snippets: &Snippets) -> Vec<QueryHit<'a>> {
    records
        .iter()
        .map(|&record| QueryHit {
            record,
            snippet: snippet_or_title(record, snippets),
        })
        .collect()
}

fn snippet_or_title(record: &MetadataRecord, snippets: &Snippets) -> String {
    match snippets.for_page(record.id) {
        Ok(Some(snippet)) => snippet,
        Ok(None) => record.title.clone(),
        Err(e) => {
            warn!(page = record.id, error = %e, "unreadable page snapshot, showing title");
            record.title.clone()
        }
    }
}

/// Renders a search result for the terminal.
#[must_use]
pub fn render(result: &SearchResult<'_>, snippets: &Snippets) -> String {
    let mut out = String::new();
    match result {
        SearchResult::Blank => {}
        SearchResult::OnlyStopwords(words) => {
            let _ = writeln!(
                out,
                "{} '{}' is made of frequently occurring words. Please input a more specific query.",
                "Note:".yellow(),
                words.join(" ")
            );
        }
        SearchResult::Hits { records, .. } if records.is_empty() => {
            let _ = writeln!(out, "{}", "No matching pages.".dimmed());
        }
        SearchResult::Hits { records, .. } => {
            for hit in with_snippets(records, snippets) {
                render_hit(&mut out, &hit);
            }
        }
    }
    out
}

fn render_hit(out: &mut String, hit: &QueryHit<'_>) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", "Page:".white(), hit.record.title.bold());
    let _ = writeln!(out, "{} {}", "Rank:".white(), hit.record.rank);
    let _ = writeln!(out, "{}", hit.snippet.dimmed());
}

/// Renders a ranked listing for the `top` command.
#[must_use]
pub fn render_listing(records: &[&MetadataRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{:>4}  {:.6}  {}",
            record.id.to_string().cyan(),
            record.rank,
            record.title
        );
    }
    out
}

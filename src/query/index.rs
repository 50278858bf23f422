// src/query/index.rs
//! In-memory index over the metadata file.

use std::path::Path;

use crate::error::Result;
use crate::metadata::{self, MetadataRecord};
use crate::text::StopWords;

/// What a query resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<'a> {
    /// Nothing but whitespace was entered.
    Blank,
    /// Every term was a stopword.
    OnlyStopwords(Vec<String>),
    /// Matching records, best rank first.
    Hits {
        terms: Vec<String>,
        records: Vec<&'a MetadataRecord>,
    },
}

pub struct Index {
    records: Vec<MetadataRecord>,
    stopwords: StopWords,
}

impl Index {
    #[must_use]
    pub fn new(mut records: Vec<MetadataRecord>, stopwords: StopWords) -> Self {
        records.sort_by_key(|r| r.id);
        Self { records, stopwords }
    }

    /// Loads the metadata file at `path`.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or malformed.
    pub fn load(path: &Path, stopwords: StopWords) -> Result<Self> {
        Ok(Self::new(metadata::read_metadata(path)?, stopwords))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[MetadataRecord] {
        &self.records
    }

    /// Records whose incoming anchor terms contain `term`, best rank first.
    #[must_use]
    pub fn find(&self, term: &str) -> Vec<&MetadataRecord> {
        let term = term.to_lowercase();
        let mut hits: Vec<_> = self
            .records
            .iter()
            .filter(|r| r.terms.iter().any(|t| *t == term))
            .collect();
        sort_by_rank(&mut hits);
        hits
    }

    /// Runs a free-text query. A record matches when it carries every
    /// non-stopword term; at most `limit` records are returned.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> SearchResult<'_> {
        let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return SearchResult::Blank;
        }
        let terms = self.stopwords.terms(query);
        if terms.is_empty() {
            return SearchResult::OnlyStopwords(words);
        }

        let mut records: Vec<_> = self
            .records
            .iter()
            .filter(|r| terms.iter().all(|term| r.terms.contains(term)))
            .collect();
        sort_by_rank(&mut records);
        records.truncate(limit);
        SearchResult::Hits { terms, records }
    }

    /// The `limit` highest ranked records.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<&MetadataRecord> {
        let mut all: Vec<_> = self.records.iter().collect();
        sort_by_rank(&mut all);
        all.truncate(limit);
        all
    }

    /// Sum of all rank scores; close to 1.0 for a well-formed file.
    #[must_use]
    pub fn total_rank(&self) -> f64 {
        self.records.iter().map(|r| r.rank).sum()
    }
}

fn sort_by_rank(records: &mut [&MetadataRecord]) {
    records.sort_by(|a, b| {
        b.rank
            .partial_cmp(&a.rank)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, rank: f64, terms: &[&str]) -> MetadataRecord {
        MetadataRecord {
            id,
            title: format!("Page {id}"),
            rank,
            terms: terms.iter().map(|t| (*t).to_string()).collect(),
        }
    }

    fn index() -> Index {
        Index::new(
            vec![
                record(0, 0.1, &["maps", "atlas"]),
                record(1, 0.5, &["maps"]),
                record(2, 0.3, &["maps", "atlas", "maps"]),
                record(3, 0.1, &["hours"]),
            ],
            StopWords::default(),
        )
    }

    #[test]
    fn test_find_orders_by_rank() {
        let index = index();
        let ids: Vec<_> = index.find("Maps").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 0]);
    }

    #[test]
    fn test_search_requires_every_term() {
        let index = index();
        let SearchResult::Hits { terms, records } = index.search("the atlas of maps", 10) else {
            panic!("expected hits");
        };
        assert_eq!(terms, vec!["atlas", "maps"]);
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 0]);
    }

    #[test]
    fn test_search_limit() {
        let index = index();
        let SearchResult::Hits { records, .. } = index.search("maps", 2) else {
            panic!("expected hits");
        };
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_stopword_only_query() {
        let index = index();
        assert_eq!(
            index.search("The AND", 10),
            SearchResult::OnlyStopwords(vec!["the".into(), "and".into()])
        );
        assert_eq!(index.search("   ", 10), SearchResult::Blank);
    }

    #[test]
    fn test_top_breaks_ties_by_id() {
        let index = index();
        let ids: Vec<_> = index.top(4).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_total_rank() {
        assert!((index().total_rank() - 1.0).abs() < 1e-12);
    }
}

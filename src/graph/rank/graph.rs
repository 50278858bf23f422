// src/graph/rank/graph.rs
//! The link graph: pages indexed by dense identity.

use std::collections::HashMap;

use crate::graph::page::{Page, PageId};
use crate::text::StopWords;

/// All in-scope pages of one crawl. Identities are assigned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    pages: Vec<Page>,
    by_url: HashMap<String, PageId>,
}

impl LinkGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a page and returns its identity. A known URL keeps its first identity.
    pub fn add_page(&mut self, url: &str, title: &str, content: Option<String>) -> PageId {
        if let Some(&id) = self.by_url.get(url) {
            return id;
        }
        let id = self.pages.len();
        self.pages.push(Page::new(id, url, title).with_content(content));
        self.by_url.insert(url.to_string(), id);
        id
    }

    #[must_use]
    pub fn id_of(&self, url: &str) -> Option<PageId> {
        self.by_url.get(url).copied()
    }

    /// Records `from -> target_url`. Returns false when the target is not a known
    /// page, `from` is out of range, or the link already exists.
    pub fn add_link(&mut self, from: PageId, target_url: &str, anchor: &str) -> bool {
        let Some(target) = self.id_of(target_url) else {
            return false;
        };
        let Some(page) = self.pages.get_mut(from) else {
            return false;
        };
        page.add_link(target, target_url, anchor)
    }

    /// Appends the terms of every link's anchor text to the page it points at.
    pub fn attribute_anchor_terms(&mut self, stopwords: &StopWords) {
        let mut incoming: Vec<(PageId, Vec<String>)> = Vec::new();
        for page in &self.pages {
            for link in page.links() {
                if link.anchor.trim().is_empty() {
                    continue;
                }
                incoming.push((link.target, stopwords.terms(&link.anchor)));
            }
        }
        for (target, terms) in incoming {
            if let Some(page) = self.pages.get_mut(target) {
                page.add_incoming_terms(terms);
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Every recorded edge as `(source, target)`, in identity order.
    pub fn edges(&self) -> impl Iterator<Item = (PageId, PageId)> + '_ {
        self.pages
            .iter()
            .flat_map(|page| page.links().iter().map(move |link| (page.id(), link.target)))
    }

    /// Total number of recorded edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.pages.iter().map(|p| p.links().len()).sum()
    }

    /// Pages with no outbound edge.
    #[must_use]
    pub fn dead_ends(&self) -> Vec<PageId> {
        self.pages
            .iter()
            .filter(|p| p.links().is_empty())
            .map(Page::id)
            .collect()
    }

    /// Copies a computed rank vector onto the pages.
    pub fn apply_ranks(&mut self, scores: &[f64]) {
        for (page, &score) in self.pages.iter_mut().zip(scores) {
            page.set_rank(score);
        }
    }

    /// Returns pages ranked by importance.
    #[must_use]
    pub fn ranked_pages(&self) -> Vec<(PageId, f64)> {
        super::queries::get_ranked_pages(self)
    }

    /// Returns the pages linking to `id`.
    #[must_use]
    pub fn inbound(&self, id: PageId) -> Vec<PageId> {
        super::queries::get_inbound(self, id)
    }
}

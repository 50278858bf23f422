// src/graph/page.rs
//! A single crawled page and its outbound links.

use std::collections::HashSet;

/// Dense page identity, `0..N`.
pub type PageId = usize;

/// Title written for pages that have none.
pub const NO_TITLE: &str = "<No Title>";

/// An outbound edge to another in-scope page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: PageId,
    pub url: String,
    pub anchor: String,
}

#[derive(Debug, Clone)]
pub struct Page {
    id: PageId,
    url: String,
    title: String,
    content: Option<String>,
    links: Vec<Link>,
    link_urls: HashSet<String>,
    incoming_terms: Vec<String>,
    rank: f64,
}

impl Page {
    #[must_use]
    pub fn new(id: PageId, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
            content: None,
            links: Vec::new(),
            link_urls: HashSet::new(),
            incoming_terms: Vec::new(),
            rank: 0.0,
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: Option<String>) -> Self {
        self.content = content;
        self
    }

    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title, or [`NO_TITLE`] when it is blank.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            NO_TITLE
        } else {
            &self.title
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn incoming_terms(&self) -> &[String] {
        &self.incoming_terms
    }

    #[must_use]
    pub fn rank(&self) -> f64 {
        self.rank
    }

    /// Records an edge. Returns false if `url` is already linked from this page.
    pub fn add_link(&mut self, target: PageId, url: &str, anchor: &str) -> bool {
        if !self.link_urls.insert(url.to_string()) {
            return false;
        }
        self.links.push(Link {
            target,
            url: url.to_string(),
            anchor: anchor.to_string(),
        });
        true
    }

    pub fn add_incoming_terms<I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.incoming_terms.extend(terms);
    }

    pub(crate) fn set_rank(&mut self, rank: f64) {
        self.rank = rank;
    }
}

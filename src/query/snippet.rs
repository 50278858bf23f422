// src/query/snippet.rs
//! Short text previews pulled from saved page snapshots.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LinkRankError, Result};
use crate::graph::PageId;

/// Paragraphs shorter than this are skipped.
pub const MIN_SNIPPET_CHARS: usize = 50;
/// Snippets are cut to this many characters.
pub const MAX_SNIPPET_CHARS: usize = 140;

/// Extracts snippets from `<pages_dir>/<id>.html`.
pub struct Snippets {
    pages_dir: PathBuf,
    paragraph_re: Regex,
    tag_re: Regex,
    space_re: Regex,
}

impl Snippets {
    /// # Errors
    /// Returns error if a pattern fails to compile.
    pub fn new(pages_dir: &Path) -> Result<Self> {
        Ok(Self {
            pages_dir: pages_dir.to_path_buf(),
            paragraph_re: Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>")?,
            tag_re: Regex::new(r"(?s)<.*?>")?,
            space_re: Regex::new(r"\s+")?,
        })
    }

    #[must_use]
    pub fn page_path(&self, id: PageId) -> PathBuf {
        self.pages_dir.join(format!("{id}.html"))
    }

    /// The snippet for `id`, or `None` if no snapshot was saved.
    ///
    /// # Errors
    /// Returns error if the snapshot exists but cannot be read.
    pub fn for_page(&self, id: PageId) -> Result<Option<String>> {
        let path = self.page_path(id);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).map_err(|e| LinkRankError::io(e, &path))?;
        Ok(self.from_html(&String::from_utf8_lossy(&bytes)))
    }

    /// First paragraph with at least [`MIN_SNIPPET_CHARS`] characters of text,
    /// cut to [`MAX_SNIPPET_CHARS`].
    #[must_use]
    pub fn from_html(&self, html: &str) -> Option<String> {
        self.paragraph_re
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|inner| self.plain_text(inner.as_str()))
            .find(|text| text.chars().count() >= MIN_SNIPPET_CHARS)
            .map(|text| text.chars().take(MAX_SNIPPET_CHARS).collect())
    }

    fn plain_text(&self, fragment: &str) -> String {
        let stripped = self.tag_re.replace_all(fragment, "");
        self.space_re.replace_all(&stripped, " ").trim().to_string()
    }
}

/// Writes a page snapshot for later snippet extraction.
///
/// # Errors
/// Returns error if the directory or file cannot be written.
pub fn save_snapshot(pages_dir: &Path, id: PageId, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(pages_dir).map_err(|e| LinkRankError::io(e, pages_dir))?;
    let path = pages_dir.join(format!("{id}.html"));
    fs::write(&path, content).map_err(|e| LinkRankError::io(e, &path))?;
    Ok(path)
}

// src/text.rs
//! Term normalization and stopword filtering for anchor text and queries.

use std::collections::HashSet;

/// Words too common to be useful as index terms.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "and", "is", "it", "an", "as", "at", "have", "in", "its", "are", "said", "from", "for", "to",
    "been", "than", "also", "other", "which", "new", "has", "was", "more", "be", "we", "that",
    "of", "but", "they", "not", "with", "by", "a", "on", "this", "2011", "could", "their",
    "these", "can", "the", "or", "first",
];

/// A case-insensitive stopword set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopWords {
    /// Builds a set from any list of words. Entries are lower-cased.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// A set that filters nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        self.words
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Splits on whitespace, lower-cases, and drops stopwords.
    /// Order and duplicates are preserved.
    #[must_use]
    pub fn terms(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(str::to_lowercase)
            .filter(|t| !self.words.contains(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_lowercase_and_filter() {
        let stop = StopWords::default();
        let terms = stop.terms("The Olin   Library and the Reading Room");
        assert_eq!(terms, vec!["olin", "library", "reading", "room"]);
    }

    #[test]
    fn test_terms_keep_duplicates_in_order() {
        let stop = StopWords::default();
        assert_eq!(stop.terms("maps maps of maps"), vec!["maps", "maps", "maps"]);
    }

    #[test]
    fn test_custom_list_is_case_insensitive() {
        let mut stop = StopWords::from_list(&["Hours"]);
        stop.extend(&["LIBRARY"]);
        assert!(stop.contains("hours"));
        assert!(stop.contains("Library"));
        assert!(!stop.contains("the"));
        assert_eq!(stop.len(), 2);
    }

    #[test]
    fn test_empty_filters_nothing() {
        let stop = StopWords::empty();
        assert!(stop.is_empty());
        assert_eq!(stop.terms("the and of"), vec!["the", "and", "of"]);
    }
}

// src/query/mod.rs
//! Keyword queries over the metadata file, ordered by rank.

mod index;
mod snippet;

pub use index::{Index, SearchResult};
pub use snippet::{save_snapshot, Snippets, MAX_SNIPPET_CHARS, MIN_SNIPPET_CHARS};

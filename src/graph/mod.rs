//! Link graph model and the rank computation engine.

pub mod manifest;
pub mod page;
pub mod rank;
pub mod url;

pub use manifest::{CrawlManifest, CrawledLink, CrawledPage};
pub use page::{Link, Page, PageId, NO_TITLE};
pub use rank::{LinkGraph, RankEngine, RankOutcome};

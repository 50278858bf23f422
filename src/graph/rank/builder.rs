// src/graph/rank/builder.rs
//! Graph construction logic: manifest ingestion and edge filtering.

use tracing::{debug, info};

use super::graph::LinkGraph;
use crate::config::ScopeConfig;
use crate::graph::manifest::{CrawlManifest, CrawledPage};
use crate::graph::page::PageId;
use crate::graph::url;
use crate::text::StopWords;

/// Counters describing what ingestion kept and dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub pages: usize,
    pub duplicate_pages: usize,
    pub links: usize,
    pub out_of_scope_links: usize,
    pub duplicate_links: usize,
}

/// Builds the frozen link graph from crawl output.
#[must_use]
pub fn build_graph(
    manifest: &CrawlManifest,
    scope: &ScopeConfig,
    stopwords: &StopWords,
) -> (LinkGraph, IngestStats) {
    let mut graph = LinkGraph::new();
    let mut stats = IngestStats::default();

    let ids = register_pages(&mut graph, &manifest.pages, &mut stats);
    for (page, id) in manifest.pages.iter().zip(ids) {
        if let Some(id) = id {
            add_links(&mut graph, id, page, scope, &mut stats);
        }
    }
    graph.attribute_anchor_terms(stopwords);

    stats.pages = graph.len();
    info!(
        pages = stats.pages,
        links = stats.links,
        dropped = stats.out_of_scope_links,
        "link graph built"
    );
    (graph, stats)
}

/// Returns the assigned identity per manifest entry; `None` for duplicates.
fn register_pages(
    graph: &mut LinkGraph,
    pages: &[CrawledPage],
    stats: &mut IngestStats,
) -> Vec<Option<PageId>> {
    pages
        .iter()
        .map(|page| {
            let clean = url::sanitize(&page.url);
            if graph.id_of(&clean).is_some() {
                debug!(url = %clean, "duplicate page in manifest, keeping first");
                stats.duplicate_pages += 1;
                return None;
            }
            Some(graph.add_page(&clean, &page.title, page.content.clone()))
        })
        .collect()
}

fn add_links(
    graph: &mut LinkGraph,
    from: PageId,
    page: &CrawledPage,
    scope: &ScopeConfig,
    stats: &mut IngestStats,
) {
    for link in &page.links {
        let target = url::sanitize(&url::resolve(&page.url, &link.href));
        if target.is_empty() || !scope.admits(&target) || graph.id_of(&target).is_none() {
            stats.out_of_scope_links += 1;
            continue;
        }
        let anchor = link.anchor.as_deref().unwrap_or("");
        if graph.add_link(from, &target, anchor) {
            stats.links += 1;
        } else {
            stats.duplicate_links += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::manifest::CrawledLink;

    fn page(url: &str, links: &[(&str, Option<&str>)]) -> CrawledPage {
        CrawledPage {
            url: url.to_string(),
            title: String::new(),
            content: None,
            links: links
                .iter()
                .map(|(href, anchor)| CrawledLink {
                    href: (*href).to_string(),
                    anchor: anchor.map(str::to_string),
                })
                .collect(),
        }
    }

    #[test]
    fn test_ids_follow_manifest_order() {
        let manifest = CrawlManifest {
            pages: vec![page("http://x/a", &[]), page("http://x/b", &[]), page("http://x/c", &[])],
        };
        let (graph, _) = build_graph(&manifest, &ScopeConfig::default(), &StopWords::default());
        assert_eq!(graph.id_of("http://x/a"), Some(0));
        assert_eq!(graph.id_of("http://x/b"), Some(1));
        assert_eq!(graph.id_of("http://x/c"), Some(2));
    }

    #[test]
    fn test_unknown_targets_are_dropped() {
        let manifest = CrawlManifest {
            pages: vec![
                page("http://x/a", &[("http://x/b", Some("b")), ("http://elsewhere/", Some("e"))]),
                page("http://x/b", &[]),
            ],
        };
        let (graph, stats) =
            build_graph(&manifest, &ScopeConfig::default(), &StopWords::default());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(stats.out_of_scope_links, 1);
    }

    #[test]
    fn test_scope_excludes_segments() {
        let scope = ScopeConfig {
            url_prefix: Some("http://x/".to_string()),
            excluded_segments: vec!["/person/".to_string()],
        };
        let manifest = CrawlManifest {
            pages: vec![
                page("http://x/a", &[("http://x/person/1", None), ("http://x/b", None)]),
                page("http://x/person/1", &[]),
                page("http://x/b", &[]),
            ],
        };
        let (graph, stats) = build_graph(&manifest, &scope, &StopWords::default());
        assert_eq!(graph.page(0).map(|p| p.links().len()), Some(1));
        assert_eq!(stats.out_of_scope_links, 1);
    }

    #[test]
    fn test_sanitized_duplicates_collapse() {
        let manifest = CrawlManifest {
            pages: vec![
                page("http://x/a", &[("http://x/b#top", Some("one")), ("http://x/b", Some("two"))]),
                page("http://x/b/index.html", &[]),
                page("http://x/b", &[]),
            ],
        };
        let (graph, stats) =
            build_graph(&manifest, &ScopeConfig::default(), &StopWords::default());
        // "http://x/b/index.html" sanitizes to "http://x/b/", a different page.
        assert_eq!(graph.len(), 3);
        assert_eq!(stats.duplicate_links, 1);
        assert_eq!(graph.page(0).map(|p| p.links()[0].anchor.clone()), Some("one".into()));
    }

    #[test]
    fn test_relative_links_resolved_against_page() {
        let manifest = CrawlManifest {
            pages: vec![
                page("http://x/dir/a", &[("b", Some("sibling")), ("/c", Some("root")), ("../c#top", None)]),
                page("http://x/dir/b", &[]),
                page("http://x/c", &[]),
            ],
        };
        let (graph, stats) =
            build_graph(&manifest, &ScopeConfig::default(), &StopWords::default());
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2)]);
        assert_eq!(stats.out_of_scope_links, 0);
        assert_eq!(stats.duplicate_links, 1);
    }

    #[test]
    fn test_anchor_terms_attributed_to_target() {
        let manifest = CrawlManifest {
            pages: vec![
                page("http://x/a", &[("http://x/c", Some("The Map Collection"))]),
                page("http://x/b", &[("http://x/c", Some("maps")), ("http://x/a", None)]),
                page("http://x/c", &[]),
            ],
        };
        let (graph, _) = build_graph(&manifest, &ScopeConfig::default(), &StopWords::default());
        let terms = graph.page(2).map(|p| p.incoming_terms().to_vec());
        assert_eq!(
            terms,
            Some(vec!["map".to_string(), "collection".to_string(), "maps".to_string()])
        );
        assert!(graph.page(0).is_some_and(|p| p.incoming_terms().is_empty()));
    }
}

use crate::graph::page::PageId;
use crate::graph::rank::graph::LinkGraph;

#[must_use]
pub fn get_ranked_pages(graph: &LinkGraph) -> Vec<(PageId, f64)> {
    let mut ranked: Vec<_> = graph.pages().iter().map(|p| (p.id(), p.rank())).collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    ranked
}

#[must_use]
pub fn get_inbound(graph: &LinkGraph, target: PageId) -> Vec<PageId> {
    graph
        .pages()
        .iter()
        .filter(|p| p.links().iter().any(|l| l.target == target))
        .map(|p| p.id())
        .collect()
}

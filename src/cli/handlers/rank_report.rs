// src/cli/handlers/rank_report.rs
//! Rank run summary formatting.

use colored::Colorize;
use std::path::Path;

use crate::graph::rank::builder::IngestStats;
use crate::graph::{LinkGraph, RankOutcome};

/// Pages listed in the summary.
const SUMMARY_PAGES: usize = 5;

/// Prints the ranking summary.
pub fn print(graph: &LinkGraph, stats: &IngestStats, outcome: &RankOutcome, output: &Path) {
    println!();
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", " RANK REPORT".bold());
    println!("{}", "─".repeat(60).dimmed());
    println!();

    print_stats(graph, stats, outcome);
    println!();
    print_leaders(graph);

    println!();
    println!("  {} {}", "Metadata:".white(), output.display());
    println!("{}", "─".repeat(60).dimmed());
}

fn print_stats(graph: &LinkGraph, stats: &IngestStats, outcome: &RankOutcome) {
    println!("  {} {}", "Pages:".white(), graph.len());
    println!("  {} {}", "Links:".white(), stats.links);
    println!("  {} {}", "Dead Ends:".white(), graph.dead_ends().len());
    if stats.out_of_scope_links > 0 || stats.duplicate_links > 0 {
        println!(
            "  {} {} out of scope, {} duplicate",
            "Dropped Links:".white(),
            stats.out_of_scope_links,
            stats.duplicate_links
        );
    }
    if stats.duplicate_pages > 0 {
        println!("  {} {}", "Duplicate Pages:".white(), stats.duplicate_pages);
    }

    let status = if outcome.converged {
        format!("converged after {} iterations", outcome.iterations)
            .green()
            .to_string()
    } else {
        format!(
            "stopped after {} iterations without converging (delta {:.2e})",
            outcome.iterations, outcome.delta
        )
        .yellow()
        .to_string()
    };
    println!("  {} {status}", "Status:".white());
}

fn print_leaders(graph: &LinkGraph) {
    println!("  {}", "Top Pages:".white());
    for (id, rank) in graph.ranked_pages().into_iter().take(SUMMARY_PAGES) {
        let Some(page) = graph.page(id) else {
            continue;
        };
        println!(
            "    {:>4}  {:.6}  {} {}",
            id.to_string().cyan(),
            rank,
            page.display_title(),
            format!("({} inbound)", graph.inbound(id).len()).dimmed()
        );
    }
}

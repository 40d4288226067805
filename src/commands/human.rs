//! Human-readable rendering of search results

use wgraph_core::graph::{DistanceEntry, EdgeEntry, PathResult, TraversalResult};

use crate::cli::Cli;

/// Output a BFS order on one line
pub fn output_traversal_human(result: &TraversalResult) {
    println!(
        "Breadth-first search from {}: {}",
        result.start,
        result.order.join(", ")
    );
}

/// Output a shortest path, or a notice when the target is unreachable
pub fn output_path_human(cli: &Cli, result: &PathResult) {
    match result.distance {
        Some(distance) if result.found => println!(
            "Shortest path from {} to {}: {} (distance {})",
            result.from,
            result.to,
            result.vertices.join(" -> "),
            distance
        ),
        _ => {
            if !cli.quiet {
                println!("No path from {} to {}", result.from, result.to);
            }
        }
    }
}

/// Output one line per vertex: name, distance, predecessor
pub fn output_distances_human(entries: &[DistanceEntry]) {
    for entry in entries {
        match (entry.distance, &entry.previous) {
            (Some(distance), Some(previous)) => {
                println!("{} {} (via {})", entry.vertex, distance, previous)
            }
            (Some(distance), None) => println!("{} {}", entry.vertex, distance),
            (None, _) => println!("{} unreachable", entry.vertex),
        }
    }
}

/// Output one edge per line in `(A -> B, weight: 2)` form
pub fn output_edges_human(cli: &Cli, entries: &[EdgeEntry]) {
    if entries.is_empty() {
        if !cli.quiet {
            println!("No edges");
        }
        return;
    }
    for entry in entries {
        println!("{}", entry);
    }
}

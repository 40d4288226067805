//! Integration tests for the graph searches
//!
//! Checks BFS and Dijkstra against independent reference computations on
//! small fixed graphs.

use std::collections::{HashMap, VecDeque};

use wgraph_core::error::GraphError;
use wgraph_core::graph::{BreadthFirstSearch, DijkstraSearch, Search, VertexId, WeightedGraph};

fn build(
    names: &[&'static str],
    edges: &[(usize, usize, f64)],
) -> (WeightedGraph<&'static str>, Vec<VertexId>) {
    let mut graph = WeightedGraph::new();
    let ids: Vec<VertexId> = names.iter().map(|n| graph.add_vertex(*n)).collect();
    for &(from, to, weight) in edges {
        graph.add_edge(ids[from], ids[to], weight).unwrap();
    }
    (graph, ids)
}

fn five_vertex() -> (WeightedGraph<&'static str>, Vec<VertexId>) {
    build(
        &["A", "B", "C", "D", "E"],
        &[
            (0, 1, 5.0),
            (0, 2, 2.0),
            (1, 3, 3.0),
            (2, 3, 1.0),
            (2, 4, 4.0),
            (3, 4, 6.0),
        ],
    )
}

fn six_vertex() -> (WeightedGraph<&'static str>, Vec<VertexId>) {
    build(
        &["A", "B", "C", "D", "E", "F"],
        &[
            (0, 1, 2.0),
            (0, 2, 4.0),
            (1, 3, 3.0),
            (1, 4, 1.0),
            (2, 3, 2.0),
            (3, 4, 2.0),
            (3, 5, 4.0),
            (4, 5, 1.0),
        ],
    )
}

/// A graph with a cycle, an unreachable pair, and a duplicated edge
fn mixed() -> (WeightedGraph<&'static str>, Vec<VertexId>) {
    build(
        &["S", "T", "U", "W", "X", "Y", "Z"],
        &[
            (0, 1, 7.0),
            (0, 2, 1.0),
            (2, 1, 3.0),
            (1, 3, 1.0),
            (3, 0, 2.0),
            (2, 3, 9.0),
            (2, 3, 6.0),
            (3, 4, 0.5),
            (5, 6, 1.0),
            (6, 0, 1.0),
        ],
    )
}

/// Enumerate every simple path from `from` to `to`
fn all_simple_paths(
    graph: &WeightedGraph<&str>,
    from: VertexId,
    to: VertexId,
) -> Vec<Vec<VertexId>> {
    fn walk(
        graph: &WeightedGraph<&str>,
        current: VertexId,
        to: VertexId,
        path: &mut Vec<VertexId>,
        out: &mut Vec<Vec<VertexId>>,
    ) {
        if current == to {
            out.push(path.clone());
            return;
        }
        for &next in graph.adjacent_vertices(current).unwrap() {
            if !path.contains(&next) {
                path.push(next);
                walk(graph, next, to, path, out);
                path.pop();
            }
        }
    }

    let mut out = Vec::new();
    walk(graph, from, to, &mut vec![from], &mut out);
    out
}

fn path_weight(graph: &WeightedGraph<&str>, path: &[VertexId]) -> f64 {
    path.windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]).unwrap())
        .sum()
}

/// Hop distances computed independently of the library BFS
fn hop_distances(graph: &WeightedGraph<&str>, start: VertexId) -> HashMap<VertexId, usize> {
    let mut hops = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let next_hop = hops[&current] + 1;
        for &next in graph.adjacent_vertices(current).unwrap() {
            if !hops.contains_key(&next) {
                hops.insert(next, next_hop);
                queue.push_back(next);
            }
        }
    }
    hops
}

#[test]
fn test_bfs_five_vertex_order() {
    let (graph, ids) = five_vertex();
    let order = BreadthFirstSearch::new(&graph).traverse(ids[0]).unwrap();
    assert_eq!(order, ids);
}

#[test]
fn test_dijkstra_five_vertex_distance_to_e() {
    let (graph, ids) = five_vertex();
    let paths = DijkstraSearch::new(&graph).traverse(ids[0]).unwrap();

    assert_eq!(paths.shortest_distance(ids[4]).unwrap(), 6.0);
    assert_eq!(paths.shortest_path(ids[4]).unwrap(), vec![ids[0], ids[2], ids[4]]);
}

#[test]
fn test_dijkstra_six_vertex_matches_brute_force() {
    let (graph, ids) = six_vertex();
    let paths = DijkstraSearch::new(&graph).traverse(ids[0]).unwrap();

    let candidates = all_simple_paths(&graph, ids[0], ids[5]);
    let best = candidates
        .iter()
        .min_by(|a, b| path_weight(&graph, a).total_cmp(&path_weight(&graph, b)))
        .unwrap();
    let best_weight = path_weight(&graph, best);

    // The minimum is unique in this graph
    assert_eq!(
        candidates
            .iter()
            .filter(|p| path_weight(&graph, p) == best_weight)
            .count(),
        1
    );
    assert_eq!(paths.shortest_distance(ids[5]).unwrap(), best_weight);
    assert_eq!(&paths.shortest_path(ids[5]).unwrap(), best);
    assert_eq!(best_weight, 4.0);
}

#[test]
fn test_bfs_visits_reachable_exactly_once_in_level_order() {
    for (graph, ids) in [five_vertex(), six_vertex(), mixed()] {
        for &start in &ids {
            let order = BreadthFirstSearch::new(&graph).traverse(start).unwrap();
            let hops = hop_distances(&graph, start);

            assert_eq!(order[0], start);
            assert_eq!(order.len(), hops.len());
            for vertex in &order {
                assert!(hops.contains_key(vertex));
                assert_eq!(order.iter().filter(|v| *v == vertex).count(), 1);
            }
            for pair in order.windows(2) {
                assert!(hops[&pair[0]] <= hops[&pair[1]]);
            }
        }
    }
}

#[test]
fn test_dijkstra_distances_match_brute_force_everywhere() {
    for (graph, ids) in [five_vertex(), six_vertex(), mixed()] {
        for &start in &ids {
            let paths = DijkstraSearch::new(&graph).traverse(start).unwrap();

            for &target in &ids {
                let candidates = all_simple_paths(&graph, start, target);
                let distance = paths.shortest_distance(target).unwrap();

                if candidates.is_empty() {
                    assert!(distance.is_infinite());
                    assert!(matches!(
                        paths.shortest_path(target),
                        Err(GraphError::NoPath { .. })
                    ));
                    continue;
                }

                let best = candidates
                    .iter()
                    .map(|p| path_weight(&graph, p))
                    .fold(f64::INFINITY, f64::min);
                assert_eq!(distance, best);

                let path = paths.shortest_path(target).unwrap();
                assert_eq!(path.first(), Some(&start));
                assert_eq!(path.last(), Some(&target));
                assert_eq!(path_weight(&graph, &path), distance);
            }
        }
    }
}

#[test]
fn test_traversals_are_repeatable() {
    let (graph, ids) = mixed();
    let bfs = BreadthFirstSearch::new(&graph);
    let dijkstra = DijkstraSearch::new(&graph);

    assert_eq!(bfs.traverse(ids[5]).unwrap(), bfs.traverse(ids[5]).unwrap());
    assert_eq!(
        dijkstra.traverse(ids[5]).unwrap(),
        dijkstra.traverse(ids[5]).unwrap()
    );
}

#[test]
fn test_equal_payloads_are_distinct_vertices() {
    let mut graph = WeightedGraph::new();
    let first = graph.add_vertex("twin");
    let second = graph.add_vertex("twin");
    graph.add_edge(first, second, 1.0).unwrap();

    let order = BreadthFirstSearch::new(&graph).traverse(first).unwrap();
    assert_eq!(order, vec![first, second]);

    let paths = DijkstraSearch::new(&graph).traverse(second).unwrap();
    assert!(!paths.is_reachable(first));
}

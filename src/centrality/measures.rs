//! The four centrality measures over a [`SpeakerGraph`].
//!
//! Closeness and betweenness use the raw interaction count as the Dijkstra
//! path cost, so a heavier edge reads as a *longer* distance. That inversion
//! is deliberate fidelity to the interchange format, not an oversight; see
//! DESIGN.md before changing it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use super::graph::SpeakerGraph;

/// Fraction of the other nodes each node is directly connected to
/// (degree divided by `n - 1`).
pub fn degree_centrality(graph: &SpeakerGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    graph
        .node_indices()
        .map(|v| graph.neighbors(v).count() as f64 / (n - 1) as f64)
        .collect()
}

/// Total interaction weight incident to each node, unnormalized.
pub fn weighted_degree(graph: &SpeakerGraph) -> Vec<f64> {
    graph
        .node_indices()
        .map(|v| graph.edges(v).map(|e| *e.weight() as f64).sum())
        .collect()
}

/// Closeness with the Wasserman-Faust scaling for disconnected graphs:
/// `(r-1)/sum_dist * (r-1)/(n-1)` where `r` counts the nodes reachable from
/// `v` including itself. Isolated nodes score 0.
pub fn closeness_centrality(graph: &SpeakerGraph) -> Vec<f64> {
    let n = graph.node_count();
    graph
        .node_indices()
        .map(|v| {
            let distances = shortest_path_lengths(graph, v);
            let reached: Vec<u64> = distances.iter().flatten().copied().collect();
            let r = reached.len();
            let total: u64 = reached.iter().sum();
            if n <= 1 || r <= 1 || total == 0 {
                return 0.0;
            }
            let inverse_average = (r - 1) as f64 / total as f64;
            inverse_average * (r - 1) as f64 / (n - 1) as f64
        })
        .collect()
}

/// Betweenness via Brandes' algorithm with Dijkstra for the weighted
/// shortest paths, normalized by `1/((n-1)(n-2))` when `n > 2`.
///
/// Each source-sink pair is accumulated from both endpoints in an undirected
/// graph; the normalization constant already folds in that factor of two.
pub fn betweenness_centrality(graph: &SpeakerGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut centrality = vec![0.0f64; n];

    for s in graph.node_indices() {
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut sigma = vec![0.0f64; n];
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut settled_order: Vec<usize> = Vec::new();
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[s.index()] = Some(0);
        sigma[s.index()] = 1.0;
        heap.push(Reverse((0u64, s)));

        while let Some(Reverse((d, v))) = heap.pop() {
            if settled[v.index()] || dist[v.index()] != Some(d) {
                continue;
            }
            settled[v.index()] = true;
            settled_order.push(v.index());

            for edge in graph.edges(v) {
                let u = edge.target();
                let next = d + *edge.weight();
                match dist[u.index()] {
                    Some(current) if next > current => {}
                    Some(current) if next == current => {
                        sigma[u.index()] += sigma[v.index()];
                        predecessors[u.index()].push(v.index());
                    }
                    _ => {
                        dist[u.index()] = Some(next);
                        sigma[u.index()] = sigma[v.index()];
                        predecessors[u.index()] = vec![v.index()];
                        heap.push(Reverse((next, u)));
                    }
                }
            }
        }

        // Accumulate pair dependencies in reverse settle order.
        let mut delta = vec![0.0f64; n];
        while let Some(w) = settled_order.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != s.index() {
                centrality[w] += delta[w];
            }
        }
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for value in &mut centrality {
            *value *= scale;
        }
    }

    centrality
}

/// Weighted single-source shortest path lengths; `None` for unreachable nodes.
///
/// Integer weights keep the relaxation exact, no float comparisons involved.
fn shortest_path_lengths(graph: &SpeakerGraph, source: NodeIndex) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.node_count()];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = Some(0);
    heap.push(Reverse((0u64, source)));

    while let Some(Reverse((d, v))) = heap.pop() {
        if dist[v.index()] != Some(d) {
            continue;
        }
        for edge in graph.edges(v) {
            let u = edge.target();
            let next = d + *edge.weight();
            if dist[u.index()].is_none_or(|current| next < current) {
                dist[u.index()] = Some(next);
                heap.push(Reverse((next, u)));
            }
        }
    }

    dist
}

/// Names of the `k` highest-scoring nodes, descending.
///
/// The sort is stable, so equal scores keep the graph's node insertion order.
pub fn top_k(graph: &SpeakerGraph, scores: &[f64], k: usize) -> Vec<String> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
        .into_iter()
        .take(k)
        .map(|i| graph[NodeIndex::new(i)].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::graph::materialize;
    use crate::models::InteractionNetwork;

    fn path_graph() -> SpeakerGraph {
        // a - b - c, both edges weight 1
        let mut network = InteractionNetwork::new();
        network.record_interaction("a", "b");
        network.record_interaction("b", "c");
        materialize(&network)
    }

    #[test]
    fn test_degree_centrality_path() {
        let graph = path_graph();
        assert_eq!(degree_centrality(&graph), vec![0.5, 1.0, 0.5]);
    }

    #[test]
    fn test_weighted_degree_sums_incident_weights() {
        let mut network = InteractionNetwork::new();
        network.record_interaction("a", "b");
        network.record_interaction("a", "b");
        network.record_interaction("a", "b");
        network.record_interaction("b", "c");
        let graph = materialize(&network);

        assert_eq!(weighted_degree(&graph), vec![3.0, 4.0, 1.0]);
    }

    #[test]
    fn test_closeness_centrality_path() {
        let graph = path_graph();
        let scores = closeness_centrality(&graph);
        // a: distances {b:1, c:2}, sum 3 -> (2/3)*(2/2)
        assert!((scores[0] - 2.0 / 3.0).abs() < 1e-12);
        // b: distances {a:1, c:1}, sum 2 -> (2/2)*(2/2)
        assert!((scores[1] - 1.0).abs() < 1e-12);
        assert!((scores[2] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_closeness_scales_by_reachable_fraction() {
        // Two components: a-b and c-d-e.
        let network: InteractionNetwork = serde_json::from_str(
            r#"{"a":{"b":1},"b":{"a":1},"c":{"d":1},"d":{"c":1,"e":1},"e":{"d":1}}"#,
        )
        .unwrap();
        let graph = materialize(&network);
        let scores = closeness_centrality(&graph);

        // a: r=2, sum=1 -> (1/1)*(1/4) = 0.25
        assert!((scores[0] - 0.25).abs() < 1e-12);
        // d: r=3, sum=2 -> (2/2)*(2/4) = 0.5
        assert!((scores[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_betweenness_centrality_path() {
        let graph = path_graph();
        let scores = betweenness_centrality(&graph);
        // Only b lies between the single (a, c) pair.
        assert_eq!(scores[0], 0.0);
        assert!((scores[1] - 1.0).abs() < 1e-12);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_heavier_edges_read_as_longer_paths() {
        // Triangle with a heavy a-c edge: the weighted shortest a-c path runs
        // through b (cost 2) rather than the direct edge (cost 5), so b picks
        // up betweenness despite the triangle being complete.
        let mut network = InteractionNetwork::new();
        network.record_interaction("a", "b");
        network.record_interaction("b", "c");
        for _ in 0..5 {
            network.record_interaction("a", "c");
        }
        let graph = materialize(&network);

        let scores = betweenness_centrality(&graph);
        assert!((scores[1] - 1.0).abs() < 1e-12);
        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_equal_shortest_paths_split_dependency() {
        // Square a-b-d-c-a, all weights 1: two equal paths a->d, through b
        // and through c, each carrying half the dependency.
        let network: InteractionNetwork = serde_json::from_str(
            r#"{"a":{"b":1,"c":1},"b":{"a":1,"d":1},"c":{"a":1,"d":1},"d":{"b":1,"c":1}}"#,
        )
        .unwrap();
        let graph = materialize(&network);

        let scores = betweenness_centrality(&graph);
        // b: half of pair (a,d), doubled from both endpoints, scaled 1/6.
        assert!((scores[1] - 1.0 / 6.0).abs() < 1e-12);
        assert!((scores[1] - scores[2]).abs() < 1e-12);
        assert_eq!(scores[0], scores[3]);
    }

    #[test]
    fn test_top_k_descending_and_truncated() {
        let graph = path_graph();
        let scores = vec![0.2, 0.9, 0.5];

        assert_eq!(top_k(&graph, &scores, 2), vec!["b", "c"]);
        assert_eq!(top_k(&graph, &scores, 10).len(), 3);
    }

    #[test]
    fn test_top_k_ties_keep_node_order() {
        let graph = path_graph();
        let scores = vec![0.5, 0.5, 0.5];
        assert_eq!(top_k(&graph, &scores, 3), vec!["a", "b", "c"]);
    }
}

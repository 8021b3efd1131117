use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};

use crate::models::InteractionNetwork;

/// Weighted undirected graph over speaker names, with edge weight the
/// interaction count.
pub type SpeakerGraph = UnGraph<String, u64>;

/// Materialize an interaction network as a weighted undirected graph.
///
/// Nodes are inserted in lexicographic name order, which is what makes the
/// later stable-sort tie-breaks deterministic across runs. Mirrored adjacency
/// entries collapse to a single edge via `update_edge`.
pub fn materialize(network: &InteractionNetwork) -> SpeakerGraph {
    let mut graph = SpeakerGraph::new_undirected();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    let mut names: BTreeSet<&str> = network.speakers().collect();
    for (a, b, _) in network.entries() {
        names.insert(a);
        names.insert(b);
    }
    for &name in &names {
        let index = graph.add_node(name.to_string());
        indices.insert(name, index);
    }

    for (a, b, weight) in network.entries() {
        if a == b {
            // Built networks never contain self-loops; tolerate hand-edited
            // input rather than corrupting degree counts.
            continue;
        }
        graph.update_edge(indices[a], indices[b], weight);
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirrored_entries_collapse_to_one_edge() {
        let mut network = InteractionNetwork::new();
        network.record_interaction("alice", "bob");
        network.record_interaction("alice", "bob");

        let graph = materialize(&network);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weights().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_isolated_key_becomes_isolated_node() {
        let network: InteractionNetwork =
            serde_json::from_str(r#"{"a":{"b":1},"b":{"a":1},"c":{}}"#).unwrap();

        let graph = materialize(&network);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_nodes_in_lexicographic_order() {
        let mut network = InteractionNetwork::new();
        network.record_interaction("zeta", "alpha");
        network.record_interaction("mid", "zeta");

        let graph = materialize(&network);
        let names: Vec<&str> = graph.node_weights().map(String::as_str).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }
}

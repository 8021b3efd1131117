use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Weighted undirected adjacency map over normalized speaker names.
///
/// Every stored weight has a mirrored entry (`network[a][b] == network[b][a]`)
/// and no speaker maps to itself. Both invariants are maintained at the single
/// mutation point, [`InteractionNetwork::record_interaction`]. The `BTreeMap`
/// backing gives the stable key order the JSON interchange format requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionNetwork(BTreeMap<String, BTreeMap<String, u64>>);

impl InteractionNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one interaction between two distinct speakers, incrementing the
    /// edge weight in both directions.
    ///
    /// Returns `false` (recording nothing) when `a == b`: self-loops are
    /// rejected at edge-creation time.
    pub fn record_interaction(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        *self
            .0
            .entry(a.to_string())
            .or_default()
            .entry(b.to_string())
            .or_default() += 1;
        *self
            .0
            .entry(b.to_string())
            .or_default()
            .entry(a.to_string())
            .or_default() += 1;
        true
    }

    /// Speaker names present as top-level keys, in lexicographic order.
    pub fn speakers(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// All stored entries as `(speaker, neighbor, weight)` triples.
    ///
    /// Mirrored entries are both yielded; consumers that want one edge per
    /// pair must collapse them.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.0.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .map(move |(b, w)| (a.as_str(), b.as_str(), *w))
        })
    }

    /// Weight of the edge from `a` to `b`, if present.
    pub fn weight(&self, a: &str, b: &str) -> Option<u64> {
        self.0.get(a).and_then(|neighbors| neighbors.get(b)).copied()
    }

    pub fn speaker_count(&self) -> usize {
        self.0.len()
    }

    /// Number of undirected edges (each mirrored pair counts once).
    pub fn edge_count(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every stored weight has an equal mirrored entry.
    pub fn is_symmetric(&self) -> bool {
        self.entries().all(|(a, b, w)| self.weight(b, a) == Some(w))
    }
}

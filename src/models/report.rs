use serde::{Deserialize, Serialize};

/// Top-ranked speakers per centrality measure.
///
/// Serializes with exactly these four keys, in declaration order. Each list
/// holds at most three names, fewer when the graph has fewer nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralityReport {
    pub degree: Vec<String>,
    pub weighted_degree: Vec<String>,
    pub closeness: Vec<String>,
    pub betweenness: Vec<String>,
}

pub mod graph;
pub mod measures;

pub use graph::{SpeakerGraph, materialize};
pub use measures::{
    betweenness_centrality, closeness_centrality, degree_centrality, top_k, weighted_degree,
};

use crate::models::{CentralityReport, InteractionNetwork};

/// How many speakers each ranking keeps.
pub const TOP_RANKED: usize = 3;

/// Compute the four centrality rankings for an interaction network.
///
/// Purely functional: the same network always yields the same report. An
/// empty network degrades to four empty rankings; a graph with fewer than
/// three nodes yields correspondingly shorter ones.
pub fn analyze(network: &InteractionNetwork) -> CentralityReport {
    let graph = materialize(network);

    CentralityReport {
        degree: top_k(&graph, &degree_centrality(&graph), TOP_RANKED),
        weighted_degree: top_k(&graph, &weighted_degree(&graph), TOP_RANKED),
        closeness: top_k(&graph, &closeness_centrality(&graph), TOP_RANKED),
        betweenness: top_k(&graph, &betweenness_centrality(&graph), TOP_RANKED),
    }
}

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{InteractionNetwork, TranscriptRow};

use super::normalize::{StopList, normalize_speaker};

/// Settings for the network build.
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Keep only this many of the most frequently speaking characters
    pub top_n: usize,
    /// Name fragments that disqualify a speaker credit
    pub stop_list: StopList,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            top_n: 101,
            stop_list: StopList::default(),
        }
    }
}

/// Select the `top_n` most frequently speaking normalized identities.
///
/// Every row with a normalizable speaker counts as one occurrence, regardless
/// of adjacency. Ties are broken by first appearance in the transcript (the
/// counter's insertion order), which is stable but not a contract.
pub fn top_speakers(rows: &[TranscriptRow], config: &BuilderConfig) -> HashSet<String> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for row in rows {
        if let Some(name) = normalize_speaker(&row.pony, &config.stop_list) {
            let count = counts.entry(name.clone()).or_insert(0);
            if *count == 0 {
                order.push(name);
            }
            *count += 1;
        }
    }

    // Stable sort keeps first-encountered order among equal counts.
    order.sort_by_key(|name| std::cmp::Reverse(counts[name]));
    order
        .into_iter()
        .take(config.top_n)
        // Re-validate: a selected name must itself survive normalization.
        .filter(|name| normalize_speaker(name, &config.stop_list).is_some())
        .collect()
}

/// Build the weighted interaction network from ordered transcript rows.
///
/// Runs the frequency pass to pick the top speakers, then the adjacency pass
/// counting consecutive-speaker transitions within each episode.
pub fn build_network(rows: &[TranscriptRow], config: &BuilderConfig) -> InteractionNetwork {
    let top = top_speakers(rows, config);
    debug!("Selected {} top speakers", top.len());
    build_with_top_speakers(rows, &top, &config.stop_list)
}

/// Adjacency pass over rows, restricted to a known top-speaker set.
///
/// Filtered rows (normalization failure or below the frequency cut) are
/// transparent: they create no edge and leave the current speaker untouched,
/// so the chain continues across them.
pub fn build_with_top_speakers(
    rows: &[TranscriptRow],
    top: &HashSet<String>,
    stop_list: &StopList,
) -> InteractionNetwork {
    let mut network = InteractionNetwork::new();
    let mut current_episode: Option<&str> = None;
    let mut current_speaker: Option<String> = None;

    for row in rows {
        if current_episode != Some(row.title.as_str()) {
            current_episode = Some(row.title.as_str());
            current_speaker = None;
        }

        let Some(speaker) = normalize_speaker(&row.pony, stop_list) else {
            continue;
        };
        if !top.contains(&speaker) {
            continue;
        }

        if let Some(previous) = current_speaker.as_deref() {
            if previous != speaker.as_str() {
                network.record_interaction(previous, &speaker);
            }
        }
        current_speaker = Some(speaker);
    }

    network
}

use serde::Deserialize;

/// One dialogue line from the transcript CSV.
///
/// Row order is significant: adjacency is defined between consecutive rows
/// within the same episode. Extra CSV columns (dialogue text etc.) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptRow {
    /// Episode identifier; a change in title resets the adjacency chain
    pub title: String,
    /// Raw speaker name as credited in the transcript
    pub pony: String,
}

impl TranscriptRow {
    pub fn new(title: impl Into<String>, pony: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            pony: pony.into(),
        }
    }
}

/// Name fragments that mark a speaker credit as a generic, non-character
/// entry ("all ponies", "rarity and applejack", "others").
///
/// Matching is by substring against the lowered, trimmed name. That breadth is
/// intentional and load-bearing: "and" catches multi-speaker credits wherever
/// the conjunction appears.
#[derive(Debug, Clone)]
pub struct StopList {
    words: Vec<String>,
}

impl Default for StopList {
    fn default() -> Self {
        Self {
            words: vec![
                "others".to_string(),
                "ponies".to_string(),
                "and".to_string(),
                "all".to_string(),
            ],
        }
    }
}

impl StopList {
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// True when any stop word occurs anywhere in the lowered name.
    pub fn blocks(&self, lowered: &str) -> bool {
        self.words.iter().any(|word| lowered.contains(word.as_str()))
    }
}

/// Normalize a raw speaker credit to a graph node key.
///
/// Lowercases and trims the name, then drops it entirely when the stop list
/// matches. Deterministic and idempotent: normalizing an already-normalized
/// name yields it unchanged.
pub fn normalize_speaker(raw: &str, stop_list: &StopList) -> Option<String> {
    let lowered = raw.to_lowercase();
    let name = lowered.trim();
    if stop_list.blocks(name) {
        None
    } else {
        Some(name.to_string())
    }
}

use serde::{Deserialize, Serialize};

/// A weighted term for the word cloud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Title-cased term
    pub text: String,
    /// Display weight in `[0, 100]`
    pub weight: f64,
    /// Case-insensitive occurrences in the source text
    pub frequency: u64,
}

impl KeywordEntry {
    pub fn new(text: &str, weight: f64, frequency: u64) -> Self {
        KeywordEntry {
            text: text.to_string(),
            weight,
            frequency,
        }
    }
}

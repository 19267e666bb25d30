use tracing::debug;

use super::types::SentenceScores;
use crate::text::TfidfVectorizer;
use crate::TARGET_SUMMARY;

/// Nations, conflict terms and weapons whose presence marks a sentence as on-topic
pub const DOMAIN_KEYWORDS: &[&str] = &[
    "pakistan",
    "india",
    "kashmir",
    "conflict",
    "ceasefire",
    "military",
    "government",
    "border",
    "attack",
    "peace",
    "tension",
    "diplomatic",
    "china",
    "afghanistan",
    "taliban",
    "nuclear",
    "missile",
    "drone",
];

/// Vocabulary cap when treating the sentence set as a corpus
pub const LEXICAL_MAX_FEATURES: usize = 100;

/// Computes the four per-sentence signals used for ranking.
#[derive(Debug, Clone)]
pub struct SentenceScorer {
    domain_keywords: &'static [&'static str],
    lexical_max_features: usize,
}

impl Default for SentenceScorer {
    fn default() -> Self {
        Self {
            domain_keywords: DOMAIN_KEYWORDS,
            lexical_max_features: LEXICAL_MAX_FEATURES,
        }
    }
}

impl SentenceScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_all(&self, sentences: &[String]) -> Vec<SentenceScores> {
        let lexical = self.lexical_scores(sentences);
        let total = sentences.len();

        sentences
            .iter()
            .enumerate()
            .map(|(i, sentence)| SentenceScores {
                lexical: lexical[i],
                keyword: self.keyword_score(sentence),
                position: position_score(i, total),
                length: length_score(sentence),
            })
            .collect()
    }

    /// Summed TF-IDF weight of each sentence within the sentence set.
    /// Falls back to a uniform 1.0 when no model can be built.
    pub fn lexical_scores(&self, sentences: &[String]) -> Vec<f64> {
        if sentences.len() < 2 {
            return vec![1.0; sentences.len()];
        }

        let vectorizer = TfidfVectorizer::new()
            .with_english_stop_words()
            .with_max_features(self.lexical_max_features);

        match vectorizer.fit_transform(sentences) {
            Ok(matrix) => (0..sentences.len()).map(|i| matrix.row_sum(i)).collect(),
            Err(e) => {
                debug!(
                    target: TARGET_SUMMARY,
                    "Sentence vectorization failed, scoring uniformly: {}", e
                );
                vec![1.0; sentences.len()]
            }
        }
    }

    /// Fraction of the domain keyword list found in the sentence
    pub fn keyword_score(&self, sentence: &str) -> f64 {
        if self.domain_keywords.is_empty() {
            return 0.0;
        }
        let lowered = sentence.to_lowercase();
        let hits = self
            .domain_keywords
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .count();
        hits as f64 / self.domain_keywords.len() as f64
    }
}

/// First and last sentences score highest, the outer 30% bands next.
pub fn position_score(index: usize, total: usize) -> f64 {
    let position = index as f64;
    let total_f = total as f64;
    if index == 0 || index + 1 == total {
        1.0
    } else if position < total_f * 0.3 || position > total_f * 0.7 {
        0.8
    } else {
        0.5
    }
}

/// Prefers sentences of 10 to 25 words
pub fn length_score(sentence: &str) -> f64 {
    let words = sentence.split_whitespace().count();
    match words {
        10..=25 => 1.0,
        8..=30 => 0.8,
        5..=35 => 0.6,
        _ => 0.3,
    }
}

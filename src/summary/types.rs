use serde::Serialize;
use std::cmp::Ordering;

/// Independent per-sentence signals, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentenceScores {
    pub lexical: f64,
    pub keyword: f64,
    pub position: f64,
    pub length: f64,
}

/// Linear weights applied to [`SentenceScores`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub lexical: f64,
    pub keyword: f64,
    pub position: f64,
    pub length: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            lexical: 0.4,
            keyword: 0.3,
            position: 0.2,
            length: 0.1,
        }
    }
}

impl ScoreWeights {
    pub fn combine(&self, scores: &SentenceScores) -> f64 {
        scores.lexical * self.lexical
            + scores.keyword * self.keyword
            + scores.position * self.position
            + scores.length * self.length
    }
}

/// A sentence under consideration for the summary, alive for one run only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceCandidate {
    pub text: String,
    pub scores: SentenceScores,
    pub combined: f64,
}

impl SentenceCandidate {
    /// Orders by combined score, then by sentence text, so the greater
    /// text wins a tie.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.combined
            .total_cmp(&other.combined)
            .then_with(|| self.text.cmp(&other.text))
    }
}

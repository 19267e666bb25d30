use tracing::debug;

use super::scoring::SentenceScorer;
use super::types::{ScoreWeights, SentenceCandidate};
use crate::text::split_sentences;
use crate::TARGET_SUMMARY;

/// Sentences of this many characters or fewer are dropped before ranking
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Below this many sentences ranking is skipped and sentences pass through
pub const MIN_RANKED_SENTENCES: usize = 3;

/// How many sentences the ranker selects by default
pub const DEFAULT_TARGET_SENTENCES: usize = 6;

/// Selects the most summary-worthy sentences from a block of text.
#[derive(Debug, Clone)]
pub struct SentenceRanker {
    scorer: SentenceScorer,
    weights: ScoreWeights,
    target_sentences: usize,
}

impl Default for SentenceRanker {
    fn default() -> Self {
        Self {
            scorer: SentenceScorer::default(),
            weights: ScoreWeights::default(),
            target_sentences: DEFAULT_TARGET_SENTENCES,
        }
    }
}

impl SentenceRanker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scorer(mut self, scorer: SentenceScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_target_sentences(mut self, target: usize) -> Self {
        self.target_sentences = target;
        self
    }

    /// Score every sentence, keeping document order
    pub fn candidates(&self, sentences: &[String]) -> Vec<SentenceCandidate> {
        self.scorer
            .score_all(sentences)
            .into_iter()
            .zip(sentences)
            .map(|(scores, text)| SentenceCandidate {
                text: text.clone(),
                combined: self.weights.combine(&scores),
                scores,
            })
            .collect()
    }

    /// Top sentences of `text`, best first.
    ///
    /// With fewer than [`MIN_RANKED_SENTENCES`] usable sentences the
    /// sentences are returned unranked, in document order.
    pub fn rank(&self, text: &str) -> Vec<String> {
        let sentences = split_sentences(text, MIN_SENTENCE_CHARS);
        if sentences.len() < MIN_RANKED_SENTENCES {
            debug!(
                target: TARGET_SUMMARY,
                "Only {} usable sentences, skipping ranking",
                sentences.len()
            );
            return sentences;
        }

        let mut candidates = self.candidates(&sentences);
        candidates.sort_by(|a, b| b.rank_cmp(a));
        candidates.truncate(self.target_sentences);

        for candidate in &candidates {
            debug!(
                target: TARGET_SUMMARY,
                "Selected sentence (score {:.3}): {}", candidate.combined, candidate.text
            );
        }

        candidates.into_iter().map(|c| c.text).collect()
    }
}

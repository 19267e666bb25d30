//! Trending keywords for word-cloud display.
//!
//! The whole batch is treated as one TF-IDF document of unigrams and
//! bigrams. Domain terms are boosted, raw frequency is blended in, and a
//! fixed list stands in whenever the text is too thin to analyze.

#[cfg(test)]
mod tests;
pub mod types;
pub mod vocabulary;

pub use types::KeywordEntry;

use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::article::Article;
use crate::extraction::{Extraction, FallbackReason};
use crate::text::{title_case, TfidfVectorizer};
use crate::TARGET_KEYWORDS;

pub const DEFAULT_MAX_KEYWORDS: usize = 20;

/// Texts shorter than this (in characters, trimmed) are not analyzed
pub const MIN_TEXT_CHARS: usize = 100;

pub const MAX_FEATURES: usize = 200;

/// Terms shorter than this are skipped
pub const MIN_TERM_CHARS: usize = 3;

/// Per-occurrence bonus applied to the TF-IDF weight
pub const FREQUENCY_BONUS: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    max_keywords: usize,
    stop_words: &'static HashSet<&'static str>,
    boosts: &'static HashMap<&'static str, f64>,
    vectorizer: TfidfVectorizer,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            stop_words: &vocabulary::STOP_WORDS,
            boosts: &vocabulary::BOOSTS,
            vectorizer: TfidfVectorizer::new()
                .with_english_stop_words()
                .with_ngram_range(1, 2)
                .with_max_features(MAX_FEATURES)
                .with_min_df(1)
                .with_max_df(0.8),
        }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Title and body of every article, each preceded by a space
    pub fn combined_text(articles: &[Article]) -> String {
        articles
            .iter()
            .map(|a| format!(" {} {}", a.title, a.text))
            .collect()
    }

    pub fn extract(&self, articles: &[Article]) -> Extraction<Vec<KeywordEntry>> {
        let all_text = Self::combined_text(articles);
        debug!(
            target: TARGET_KEYWORDS,
            "Combined text of {} articles is {} characters",
            articles.len(),
            all_text.chars().count()
        );

        if all_text.trim().chars().count() < MIN_TEXT_CHARS {
            warn!(target: TARGET_KEYWORDS, "Insufficient text for TF-IDF analysis, using fallback keywords");
            return Extraction::Fallback(
                vocabulary::fallback_keywords(),
                FallbackReason::InsufficientInput,
            );
        }

        let matrix = match self.vectorizer.fit_transform(&[all_text.as_str()]) {
            Ok(matrix) => matrix,
            Err(e) => {
                warn!(target: TARGET_KEYWORDS, "Keyword vectorization failed, using fallback keywords: {}", e);
                return Extraction::Fallback(
                    vocabulary::fallback_keywords(),
                    FallbackReason::VectorizationFailure,
                );
            }
        };
        debug!(target: TARGET_KEYWORDS, "TF-IDF extracted {} features", matrix.features.len());

        let lowered = all_text.to_lowercase();
        let mut keywords: Vec<KeywordEntry> = matrix
            .features
            .iter()
            .zip(&matrix.rows[0])
            .filter_map(|(term, score)| self.score_term(term, *score, &lowered))
            .collect();

        keywords.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        keywords.truncate(self.max_keywords);

        if keywords.is_empty() {
            warn!(target: TARGET_KEYWORDS, "No keywords survived filtering, using fallback keywords");
            return Extraction::Fallback(vocabulary::fallback_keywords(), FallbackReason::NoCandidates);
        }

        info!(target: TARGET_KEYWORDS, "Extracted {} trending keywords", keywords.len());
        for (i, keyword) in keywords.iter().take(5).enumerate() {
            debug!(
                target: TARGET_KEYWORDS,
                "  {}. {} (weight: {:.1}, freq: {})",
                i + 1,
                keyword.text,
                keyword.weight,
                keyword.frequency
            );
        }

        Extraction::Extracted(keywords)
    }

    /// Filter, boost and weight one vectorizer term against the lowercased
    /// source text. Returns `None` for terms that should not be displayed.
    fn score_term(&self, term: &str, tfidf: f64, lowered_text: &str) -> Option<KeywordEntry> {
        let term = term.to_lowercase();
        if self.stop_words.contains(term.as_str())
            || term.chars().count() < MIN_TERM_CHARS
            || term.chars().all(char::is_numeric)
        {
            return None;
        }

        let boosted = tfidf * self.boosts.get(term.as_str()).copied().unwrap_or(1.0);
        let frequency = lowered_text.matches(term.as_str()).count() as u64;
        let combined = boosted * (1.0 + frequency as f64 * FREQUENCY_BONUS);

        Some(KeywordEntry {
            text: title_case(&term),
            weight: (combined * 100.0).min(100.0),
            frequency,
        })
    }
}

/// Trending keywords for `articles`, at most `max_keywords` entries
pub fn extract_keywords(articles: &[Article], max_keywords: usize) -> Vec<KeywordEntry> {
    KeywordExtractor::default()
        .with_max_keywords(max_keywords)
        .extract(articles)
        .into_inner()
}

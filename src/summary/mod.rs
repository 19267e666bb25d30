//! Extractive narrative summary of an article batch.
//!
//! Sentences from every article body are scored by the [`SentenceScorer`],
//! the best are picked by the [`SentenceRanker`] and the
//! [`SummaryComposer`] stitches them behind a title-driven opener.

pub mod composer;
pub mod ranking;
pub mod scoring;
#[cfg(test)]
mod tests;
pub mod types;

pub use composer::{SummaryComposer, ThemeRule, THEME_RULES};
pub use ranking::SentenceRanker;
pub use scoring::SentenceScorer;
pub use types::*;

use tracing::{info, warn};

use crate::article::Article;
use crate::text::split_sentences;
use crate::TARGET_SUMMARY;

pub const NO_ARTICLES_MESSAGE: &str =
    "No recent news articles found about the India-Pakistan conflict.";

pub const NO_READABLE_CONTENT_MESSAGE: &str = "No readable content found in articles.";

/// Words marking a sentence as describing civilian or economic impact
pub const IMPACT_KEYWORDS: &[&str] = &[
    "civilian",
    "casualties",
    "killed",
    "injured",
    "economic",
    "trade",
    "border crossing",
];

/// Ranker and composer bundled for one summary run.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    ranker: SentenceRanker,
    composer: SummaryComposer,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ranker(mut self, ranker: SentenceRanker) -> Self {
        self.ranker = ranker;
        self
    }

    pub fn summarize(&self, articles: &[Article]) -> String {
        if articles.is_empty() {
            warn!(target: TARGET_SUMMARY, "No articles available for summary generation");
            return NO_ARTICLES_MESSAGE.to_string();
        }

        let titles: Vec<&str> = articles.iter().map(|a| a.title.as_str()).collect();
        let bodies: Vec<String> = articles
            .iter()
            .map(|a| a.text.replace('\n', " ").trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if bodies.is_empty() {
            warn!(target: TARGET_SUMMARY, "Articles carry no readable body text");
            return NO_READABLE_CONTENT_MESSAGE.to_string();
        }

        let ranked = self.ranker.rank(&bodies.join(" "));
        let summary = self.composer.compose(&ranked, &titles);

        info!(
            target: TARGET_SUMMARY,
            "Generated summary from {} articles ({} key sentences)",
            articles.len(),
            ranked.len()
        );
        summary
    }
}

/// Narrative summary of `articles` using the default ranker and composer
pub fn rank_and_summarize(articles: &[Article]) -> String {
    Summarizer::default().summarize(articles)
}

/// Up to two sentences describing civilian, casualty or economic impact.
///
/// Each text is scanned in order; a text stops contributing once three
/// impact sentences have been collected overall.
pub fn extract_impact_sentences<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let mut found = Vec::new();

    for text in texts {
        for sentence in split_sentences(text.as_ref(), 0) {
            let lowered = sentence.to_lowercase();
            let is_impact = IMPACT_KEYWORDS.iter().any(|k| lowered.contains(k));
            if is_impact && sentence.chars().count() > 30 {
                found.push(sentence);
                if found.len() >= 3 {
                    break;
                }
            }
        }
    }

    found.truncate(2);
    found
}

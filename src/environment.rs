use std::env;
use std::str::FromStr;

use crate::keywords::DEFAULT_MAX_KEYWORDS;
use crate::summary::ranking::DEFAULT_TARGET_SENTENCES;

pub const DEFAULT_REPORT_ARTICLES: usize = 5;

/// Retrieves an environment variable and parses it into `T`.
///
/// # Arguments
/// - `var`: The name of the environment variable.
///
/// # Returns
/// - `Some(T)` if the variable is set and parses, `None` otherwise.
pub fn get_env_var_as<T: FromStr>(var: &str) -> Option<T> {
    env::var(var).ok().and_then(|value| value.trim().parse().ok())
}

/// Tunables shared by the report builder and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub max_keywords: usize,
    pub summary_sentences: usize,
    pub report_articles: usize,
    pub max_age_days: Option<i64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            summary_sentences: DEFAULT_TARGET_SENTENCES,
            report_articles: DEFAULT_REPORT_ARTICLES,
            max_age_days: None,
        }
    }
}

impl PipelineConfig {
    /// Reads `FLASHPOINT_MAX_KEYWORDS`, `FLASHPOINT_SUMMARY_SENTENCES`,
    /// `FLASHPOINT_REPORT_ARTICLES` and `FLASHPOINT_MAX_AGE_DAYS`. Absent or
    /// malformed values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_keywords: get_env_var_as("FLASHPOINT_MAX_KEYWORDS").unwrap_or(defaults.max_keywords),
            summary_sentences: get_env_var_as("FLASHPOINT_SUMMARY_SENTENCES")
                .unwrap_or(defaults.summary_sentences),
            report_articles: get_env_var_as("FLASHPOINT_REPORT_ARTICLES")
                .unwrap_or(defaults.report_articles),
            max_age_days: get_env_var_as("FLASHPOINT_MAX_AGE_DAYS"),
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn with_summary_sentences(mut self, sentences: usize) -> Self {
        self.summary_sentences = sentences;
        self
    }

    pub fn with_report_articles(mut self, articles: usize) -> Self {
        self.report_articles = articles;
        self
    }

    pub fn with_max_age_days(mut self, days: Option<i64>) -> Self {
        self.max_age_days = days;
        self
    }
}

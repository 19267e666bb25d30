//! Pattern-based incident statistics.

pub mod patterns;
pub mod types;

pub use patterns::{CasualtyMatcher, CasualtyShape, Numeral};
pub use types::*;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::{debug, info};

use crate::article::Article;
use crate::TARGET_STATISTICS;

pub const DEATH_KEYWORDS: &[&str] = &["killed", "dead", "deaths", "died", "fatalities", "casualties"];

pub const INJURY_KEYWORDS: &[&str] = &["injured", "wounded", "hurt", "casualties"];

pub const MILITARY_KEYWORDS: &[&str] = &[
    "missile",
    "drone",
    "attack",
    "strike",
    "firing",
    "shelling",
    "aircraft",
    "military operation",
    "bomb",
    "blast",
    "explosion",
];

pub const DIPLOMATIC_KEYWORDS: &[&str] = &[
    "meeting",
    "talks",
    "summit",
    "minister",
    "ambassador",
    "diplomatic",
    "negotiation",
    "dialogue",
];

pub const BORDER_KEYWORDS: &[&str] = &[
    "border",
    "loc",
    "line of control",
    "ceasefire",
    "violation",
    "infiltration",
    "cross-border",
];

/// A category and the keywords that flag an article as belonging to it
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub category: IncidentCategory,
    pub keywords: &'static [&'static str],
}

pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: IncidentCategory::Military,
        keywords: MILITARY_KEYWORDS,
    },
    CategoryRule {
        category: IncidentCategory::Diplomatic,
        keywords: DIPLOMATIC_KEYWORDS,
    },
    CategoryRule {
        category: IncidentCategory::Border,
        keywords: BORDER_KEYWORDS,
    },
];

const DEATH_SHAPES: &[CasualtyShape] = &[
    CasualtyShape::LeadingCount,
    CasualtyShape::TrailingCount,
    CasualtyShape::TollPhrase,
    CasualtyShape::AtLeast,
];

const INJURY_SHAPES: &[CasualtyShape] = &[
    CasualtyShape::LeadingCount,
    CasualtyShape::TrailingCount,
    CasualtyShape::AtLeast,
];

static DEFAULT_EXTRACTOR: Lazy<StatisticsExtractor> = Lazy::new(|| {
    StatisticsExtractor::with_keywords(DEATH_KEYWORDS, INJURY_KEYWORDS, CATEGORY_RULES)
        .expect("built-in statistics patterns compile")
});

/// Accumulates casualty, category and economic figures over articles.
#[derive(Debug, Clone)]
pub struct StatisticsExtractor {
    deaths: CasualtyMatcher,
    injuries: CasualtyMatcher,
    categories: &'static [CategoryRule],
}

impl Default for StatisticsExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

impl StatisticsExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keywords(
        death_keywords: &[&str],
        injury_keywords: &[&str],
        categories: &'static [CategoryRule],
    ) -> Result<Self> {
        Ok(Self {
            deaths: CasualtyMatcher::new("deaths", death_keywords, DEATH_SHAPES)?,
            injuries: CasualtyMatcher::new("injuries", injury_keywords, INJURY_SHAPES)?,
            categories,
        })
    }

    /// Categories the lowercased text belongs to, in rule order. Within a
    /// rule the first matching keyword decides and the rest are not checked.
    pub fn categories_of(&self, text: &str) -> Vec<IncidentCategory> {
        self.categories
            .iter()
            .filter_map(|rule| {
                rule.keywords
                    .iter()
                    .find(|keyword| text.contains(*keyword))
                    .map(|keyword| {
                        debug!(
                            target: TARGET_STATISTICS,
                            "{} activity detected: {}", rule.category, keyword
                        );
                        rule.category
                    })
            })
            .collect()
    }

    pub fn extract(&self, articles: &[Article]) -> StatisticsReport {
        let mut report = StatisticsReport::default();

        for (i, article) in articles.iter().enumerate() {
            let text = article.combined_lowercase();
            debug!(
                target: TARGET_STATISTICS,
                "Analyzing article {}: {}",
                i + 1,
                article.title
            );

            let deaths = self.deaths.count(&text);
            let injuries = self.injuries.count(&text);
            report.add_casualties(deaths, injuries);

            for category in self.categories_of(&text) {
                report.record_category(category);
            }

            report.economic_impact.extend(patterns::economic_figures(&text));
            report.key_developments += 1;
        }

        report.finalize();

        info!(
            target: TARGET_STATISTICS,
            "Statistics: {} deaths, {} injuries, {} military incidents, {} diplomatic meetings, {} border violations",
            report.deaths,
            report.injuries,
            report.military_incidents,
            report.diplomatic_meetings,
            report.border_violations
        );

        report
    }
}

/// Incident statistics for `articles` using the built-in vocabularies
pub fn extract_statistics(articles: &[Article]) -> StatisticsReport {
    StatisticsExtractor::default().extract(articles)
}

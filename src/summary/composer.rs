use tracing::debug;

use crate::text::capitalize_first;
use crate::TARGET_SUMMARY;

/// Cleaned sentences of this many characters or fewer are left out
pub const MIN_CLAUSE_CHARS: usize = 30;

/// Sentences under this length are rejected before any cleanup
pub const MIN_CLEANABLE_CHARS: usize = 20;

/// How many ranked sentences the narrative draws from
pub const MAX_CLAUSES: usize = 4;

pub const GENERIC_INTRO: &str = "The India-Pakistan conflict continues to evolve with significant regional and international implications.";

pub const EMERGING_CLOSING: &str = "Recent developments are still emerging, with ongoing diplomatic and security concerns in the region.";

/// Dateline prefixes that carry no information in a summary
pub const LOCATION_PREFIXES: &[&str] = &[
    "Islamabad, Pakistan –",
    "Islamabad, Pakistan -",
    "New Delhi, India –",
    "New Delhi, India -",
];

/// Connective phrases placed before the 1st, 2nd, 3rd and 4th clause
const CONNECTIVES: [&str; MAX_CLAUSES] = [
    "Recent developments indicate that",
    "Additionally,",
    "Meanwhile,",
    "The ongoing situation has resulted in",
];

/// A thematic opener chosen when `matches` accepts the lowercased titles
#[derive(Debug, Clone, Copy)]
pub struct ThemeRule {
    pub theme: &'static str,
    pub matches: fn(&str) -> bool,
    pub intro: &'static str,
}

fn diplomatic_theme(titles: &str) -> bool {
    titles.contains("ceasefire") || titles.contains("peace")
}

fn military_theme(titles: &str) -> bool {
    titles.contains("attack") || titles.contains("missile") || titles.contains("drone")
}

fn regional_theme(titles: &str) -> bool {
    titles.contains("china") && (titles.contains("afghanistan") || titles.contains("taliban"))
}

fn taliban_theme(titles: &str) -> bool {
    titles.contains("taliban")
}

fn china_theme(titles: &str) -> bool {
    titles.contains("china")
}

/// Evaluated in order; the first match wins.
pub const THEME_RULES: &[ThemeRule] = &[
    ThemeRule {
        theme: "diplomatic",
        matches: diplomatic_theme,
        intro: "The India-Pakistan conflict shows signs of potential diplomatic breakthrough as peace initiatives gain momentum.",
    },
    ThemeRule {
        theme: "military",
        matches: military_theme,
        intro: "Military tensions have escalated in the India-Pakistan conflict, with both nations engaging in strategic operations.",
    },
    ThemeRule {
        theme: "regional",
        matches: regional_theme,
        intro: "Regional dynamics involving China and Afghanistan are reshaping India-Pakistan relations in South Asia.",
    },
    ThemeRule {
        theme: "taliban",
        matches: taliban_theme,
        intro: "The Taliban's growing influence is creating new diplomatic complexities in India-Pakistan relations.",
    },
    ThemeRule {
        theme: "china",
        matches: china_theme,
        intro: "China's involvement continues to influence the strategic balance between India and Pakistan.",
    },
];

/// Turns ranked sentences into a short narrative paragraph.
#[derive(Debug, Clone)]
pub struct SummaryComposer {
    rules: &'static [ThemeRule],
    generic_intro: &'static str,
    location_prefixes: &'static [&'static str],
}

impl Default for SummaryComposer {
    fn default() -> Self {
        Self {
            rules: THEME_RULES,
            generic_intro: GENERIC_INTRO,
            location_prefixes: LOCATION_PREFIXES,
        }
    }
}

impl SummaryComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-sentence opener picked from the article titles
    pub fn context_intro<S: AsRef<str>>(&self, titles: &[S]) -> &'static str {
        let joined = titles
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match self.rules.iter().find(|rule| (rule.matches)(&joined)) {
            Some(rule) => {
                debug!(target: TARGET_SUMMARY, "Titles matched the {} theme", rule.theme);
                rule.intro
            }
            None => self.generic_intro,
        }
    }

    /// Tidy a raw sentence into a standalone clause. Returns an empty
    /// string for fragments too short to use.
    pub fn clean_sentence(&self, sentence: &str) -> String {
        let mut cleaned = sentence.trim().to_string();
        if cleaned.chars().count() < MIN_CLEANABLE_CHARS {
            return String::new();
        }

        for prefix in self.location_prefixes {
            if let Some(rest) = cleaned.strip_prefix(prefix) {
                cleaned = rest.trim().to_string();
            }
        }

        cleaned = cleaned.replace(" – ", " - ").replace("  ", " ");

        if !cleaned.ends_with(['.', '!', '?']) {
            cleaned.push('.');
        }

        capitalize_first(&cleaned)
    }

    /// Compose the narrative from ranked sentences (best first) and titles.
    pub fn compose<S: AsRef<str>, T: AsRef<str>>(&self, ranked: &[S], titles: &[T]) -> String {
        let intro = self.context_intro(titles);

        if ranked.is_empty() {
            return format!("{} {}", intro, EMERGING_CLOSING);
        }

        let clauses: Vec<String> = ranked
            .iter()
            .take(MAX_CLAUSES)
            .map(|sentence| self.clean_sentence(sentence.as_ref()))
            .filter(|clause| clause.chars().count() > MIN_CLAUSE_CHARS)
            .collect();

        debug!(
            target: TARGET_SUMMARY,
            "{} of {} ranked sentences survived cleanup",
            clauses.len(),
            ranked.len().min(MAX_CLAUSES)
        );

        if clauses.len() < 2 {
            let mut parts = vec![intro.to_string()];
            parts.extend(clauses);
            return parts.join(" ");
        }

        let mut parts = vec![intro.to_string()];
        for (connective, clause) in CONNECTIVES.iter().zip(&clauses) {
            parts.push(format!("{} {}", connective, clause.to_lowercase()));
        }
        parts.join(" ")
    }
}

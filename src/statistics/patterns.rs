//! Regex families for casualty and economic figures.
//!
//! Every casualty shape is compiled twice, once for digit numerals and once
//! for spelled-out numerals from zero to twenty. Overlapping shapes are not
//! deduplicated: "at least 6 killed" is seen by both the leading-count and
//! the "at least" family and contributes 12.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::TARGET_STATISTICS;

pub const NUMBER_WORDS: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
];

static ECONOMIC_FIGURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:billion|million)").expect("economic pattern is valid")
});

/// Convert a spelled-out numeral; unknown words yield `None`
pub fn word_to_number(word: &str) -> Option<u64> {
    let lowered = word.to_lowercase();
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == lowered)
        .map(|(_, n)| *n)
}

/// How a count is written in the text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeral {
    Digits,
    Words,
}

impl Numeral {
    fn pattern(&self) -> String {
        match self {
            Numeral::Digits => r"([0-9]+)".to_string(),
            Numeral::Words => format!(
                r"({})\b",
                NUMBER_WORDS
                    .iter()
                    .map(|(w, _)| *w)
                    .collect::<Vec<_>>()
                    .join("|")
            ),
        }
    }

    fn value(&self, raw: &str) -> Option<u64> {
        match self {
            Numeral::Digits => raw.parse().ok(),
            Numeral::Words => word_to_number(raw),
        }
    }
}

/// Phrase shapes that carry a casualty count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasualtyShape {
    /// "6 killed", "six children killed"
    LeadingCount,
    /// "killed 6"
    TrailingCount,
    /// "death toll of 6", "6 deaths"
    TollPhrase,
    /// "at least 6 killed"
    AtLeast,
}

impl CasualtyShape {
    fn pattern(&self, number: &str, keywords: &str) -> String {
        match self {
            CasualtyShape::LeadingCount => {
                format!(r"{number}\s+(?:people\s+|children\s+)?(?:{keywords})")
            }
            CasualtyShape::TrailingCount => format!(r"(?:{keywords})\s+{number}"),
            CasualtyShape::TollPhrase => {
                format!(r"(?:death toll of|toll of|death count of)\s+{number}|{number}\s+deaths")
            }
            CasualtyShape::AtLeast => format!(r"at least\s+{number}\s+(?:{keywords})"),
        }
    }
}

#[derive(Debug, Clone)]
struct Family {
    shape: CasualtyShape,
    numeral: Numeral,
    regex: Regex,
}

/// Counts one casualty class (deaths, injuries) in lowercased text.
#[derive(Debug, Clone)]
pub struct CasualtyMatcher {
    class: &'static str,
    families: Vec<Family>,
}

impl CasualtyMatcher {
    pub fn new(
        class: &'static str,
        keywords: &[&str],
        shapes: &[CasualtyShape],
    ) -> Result<Self> {
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");

        let mut families = Vec::new();
        for numeral in [Numeral::Digits, Numeral::Words] {
            for shape in shapes {
                let regex = Regex::new(&shape.pattern(&numeral.pattern(), &alternation))?;
                families.push(Family {
                    shape: *shape,
                    numeral,
                    regex,
                });
            }
        }

        Ok(Self { class, families })
    }

    /// Sum of every count matched by every family
    pub fn count(&self, text: &str) -> u64 {
        let mut total: u64 = 0;
        for family in &self.families {
            for captures in family.regex.captures_iter(text) {
                for group in captures.iter().skip(1).flatten() {
                    if let Some(value) = family.numeral.value(group.as_str()) {
                        debug!(
                            target: TARGET_STATISTICS,
                            "Found {} {} ({:?}, {:?} '{}')",
                            value,
                            self.class,
                            family.shape,
                            family.numeral,
                            group.as_str()
                        );
                        total = total.saturating_add(value);
                    }
                }
            }
        }
        total
    }
}

/// Every `<number> billion|million` figure in encounter order, unit not applied
pub fn economic_figures(text: &str) -> Vec<f64> {
    ECONOMIC_FIGURE
        .captures_iter(text)
        .filter_map(|captures| captures.get(1))
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deaths() -> CasualtyMatcher {
        CasualtyMatcher::new(
            "deaths",
            &["killed", "dead", "deaths", "died", "fatalities", "casualties"],
            &[
                CasualtyShape::LeadingCount,
                CasualtyShape::TrailingCount,
                CasualtyShape::TollPhrase,
                CasualtyShape::AtLeast,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_word_to_number() {
        assert_eq!(word_to_number("six"), Some(6));
        assert_eq!(word_to_number("Twenty"), Some(20));
        assert_eq!(word_to_number("dozen"), None);
    }

    #[test]
    fn test_digits_and_words_agree() {
        let matcher = deaths();
        assert_eq!(matcher.count("6 killed in blast"), 6);
        assert_eq!(matcher.count("six killed in blast"), 6);
        assert_eq!(matcher.count("four children killed"), 4);
        assert_eq!(matcher.count("4 children killed"), 4);
        assert_eq!(matcher.count("seventeen dead"), 17);
    }

    #[test]
    fn test_overlapping_families_are_summed() {
        let matcher = deaths();
        assert_eq!(matcher.count("at least 6 killed"), 12);
        assert_eq!(matcher.count("at least six killed"), 12);
        // "deaths" is both a keyword and the toll-phrase suffix
        assert_eq!(matcher.count("5 deaths"), 10);
        assert_eq!(matcher.count("a death toll of 9"), 9);
    }

    #[test]
    fn test_no_match_contributes_zero() {
        assert_eq!(deaths().count("talks resumed in the capital"), 0);
    }

    #[test]
    fn test_word_numerals_after_keyword_are_not_truncated() {
        let matcher = deaths();
        assert_eq!(matcher.count("the blast killed eighteen"), 18);
        assert_eq!(matcher.count("the death toll of sixteen was confirmed"), 16);
        assert_eq!(matcher.count("sixteen killed"), 16);
        // a trailing word boundary only, so the "one" in "someone" still counts
        assert_eq!(matcher.count("someone killed"), 1);
    }

    #[test]
    fn test_only_ascii_digits_are_counted() {
        assert_eq!(deaths().count("३ killed"), 0);
        assert!(economic_figures("losses of ३ billion").is_empty());
    }

    #[test]
    fn test_economic_figures() {
        assert_eq!(
            economic_figures("losses of 2.5 billion and 300 million, then 40million"),
            vec![2.5, 300.0, 40.0]
        );
        assert!(economic_figures("millions were affected").is_empty());
    }
}

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

use super::types::KeywordEntry;

/// News boilerplate and generic words never worth showing
pub const CUSTOM_STOP_WORDS: &[&str] = &[
    "said", "says", "according", "report", "reports", "news", "article", "also", "would", "could",
    "should", "one", "two", "three", "new", "first", "last", "many", "several", "some", "other",
    "more", "most", "year", "years", "day", "days", "time", "week", "weeks", "month", "months",
    "today", "yesterday", "people", "government", "country", "countries", "state", "states",
    "region", "area", "world", "including", "following", "during", "after", "before", "between",
    "among", "across", "within",
];

/// Multipliers applied to the TF-IDF weight of conflict-specific terms
pub const DOMAIN_BOOSTS: &[(&str, f64)] = &[
    ("pakistan", 3.0),
    ("india", 3.0),
    ("kashmir", 2.5),
    ("conflict", 2.0),
    ("ceasefire", 2.5),
    ("military", 2.0),
    ("border", 2.0),
    ("attack", 2.0),
    ("peace", 2.5),
    ("tension", 2.0),
    ("diplomatic", 2.0),
    ("china", 1.8),
    ("afghanistan", 1.8),
    ("taliban", 1.8),
    ("nuclear", 2.2),
    ("missile", 2.0),
    ("drone", 1.8),
    ("terrorism", 2.0),
    ("security", 1.8),
    ("violence", 2.0),
    ("negotiations", 2.5),
    ("talks", 2.0),
    ("minister", 1.5),
    ("army", 1.8),
    ("forces", 1.8),
    ("loc", 2.0),
    ("balochistan", 1.8),
    ("punjab", 1.5),
    ("karachi", 1.5),
    ("islamabad", 1.5),
    ("delhi", 1.5),
    ("mumbai", 1.5),
    ("soldiers", 1.8),
    ("civilians", 2.0),
    ("casualties", 2.2),
    ("killed", 2.0),
    ("injured", 1.8),
    ("blast", 2.0),
    ("bomb", 2.0),
    ("shelling", 2.0),
];

/// Shown when nothing can be extracted, in display order
pub const FALLBACK_KEYWORDS: &[(&str, f64, u64)] = &[
    ("Pakistan", 100.0, 10),
    ("India", 95.0, 9),
    ("Kashmir", 80.0, 6),
    ("Conflict", 70.0, 5),
    ("Military", 60.0, 4),
    ("Border", 55.0, 4),
    ("Diplomatic", 50.0, 3),
    ("Security", 45.0, 3),
    ("Taliban", 42.0, 3),
    ("China", 40.0, 2),
    ("Afghanistan", 38.0, 2),
    ("Nuclear", 35.0, 2),
];

lazy_static! {
    pub static ref STOP_WORDS: HashSet<&'static str> = CUSTOM_STOP_WORDS.iter().copied().collect();
    pub static ref BOOSTS: HashMap<&'static str, f64> = DOMAIN_BOOSTS.iter().copied().collect();
}

pub fn fallback_keywords() -> Vec<KeywordEntry> {
    FALLBACK_KEYWORDS
        .iter()
        .map(|(text, weight, frequency)| KeywordEntry::new(text, *weight, *frequency))
        .collect()
}

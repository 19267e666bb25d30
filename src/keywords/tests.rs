use super::*;
use crate::article::Article;

fn kashmir_article() -> Article {
    Article::new(
        "Kashmir tensions rise",
        "Kashmir border shelling continued as India and Pakistan said talks would resume. \
         Kashmir residents said 2025 was tense.",
        "https://example.com/kashmir",
    )
}

#[test]
fn test_fallback_on_empty_input() {
    let extraction = KeywordExtractor::new().extract(&[]);
    assert_eq!(extraction.fallback_reason(), Some(FallbackReason::InsufficientInput));

    let keywords = extract_keywords(&[], DEFAULT_MAX_KEYWORDS);
    let weights: Vec<f64> = keywords.iter().map(|k| k.weight).collect();
    assert_eq!(
        weights,
        vec![100.0, 95.0, 80.0, 70.0, 60.0, 55.0, 50.0, 45.0, 42.0, 40.0, 38.0, 35.0]
    );
    assert_eq!(keywords[0].text, "Pakistan");
    assert_eq!(keywords[11].text, "Nuclear");
}

#[test]
fn test_fallback_on_short_text() {
    let articles = vec![Article::new("Kashmir", "Brief update on the border.", "u")];
    let keywords = extract_keywords(&articles, DEFAULT_MAX_KEYWORDS);
    assert_eq!(keywords, vocabulary::fallback_keywords());
}

#[test]
fn test_fallback_when_only_stop_words() {
    let filler = "and the of it is was were be to from ".repeat(5);
    let articles = vec![Article::new("The", &filler, "u")];
    let extraction = KeywordExtractor::new().extract(&articles);
    assert_eq!(extraction.fallback_reason(), Some(FallbackReason::VectorizationFailure));
    assert_eq!(extraction.into_inner().len(), 12);
}

#[test]
fn test_boosted_terms_lead() {
    let extraction = KeywordExtractor::new().extract(&[kashmir_article()]);
    assert!(!extraction.is_fallback());
    let keywords = extraction.into_inner();

    assert_eq!(keywords[0].text, "Kashmir");
    assert_eq!(keywords[0].weight, 100.0);
    assert_eq!(keywords[0].frequency, 3);
    // equal weights keep alphabetical feature order
    assert_eq!(keywords[1].text, "India");
    assert_eq!(keywords[2].text, "Pakistan");
    assert_eq!(keywords[1].weight, keywords[2].weight);
}

#[test]
fn test_filters_and_ordering() {
    let keywords = extract_keywords(&[kashmir_article()], 50);
    assert!(keywords.iter().all(|k| k.text != "Said"));
    assert!(keywords.iter().all(|k| k.text != "2025"));
    assert!(keywords.iter().any(|k| k.text == "India Pakistan"));
    assert!(keywords
        .windows(2)
        .all(|pair| pair[0].weight >= pair[1].weight));
    assert!(keywords.iter().all(|k| (0.0..=100.0).contains(&k.weight)));
}

#[test]
fn test_respects_max_keywords() {
    assert_eq!(extract_keywords(&[kashmir_article()], 5).len(), 5);
    assert_eq!(extract_keywords(&[kashmir_article()], DEFAULT_MAX_KEYWORDS).len(), 20);
}

#[test]
fn test_keywords_are_idempotent() {
    let articles = vec![kashmir_article()];
    assert_eq!(
        extract_keywords(&articles, DEFAULT_MAX_KEYWORDS),
        extract_keywords(&articles, DEFAULT_MAX_KEYWORDS)
    );
}

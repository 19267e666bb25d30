use super::*;
use crate::article::Article;

fn sample_articles() -> Vec<Article> {
    vec![
        Article::new(
            "Ceasefire talks resume between India and Pakistan",
            "Islamabad, Pakistan – Senior diplomats from India and Pakistan met on Monday to discuss the fragile ceasefire along the Line of Control. \
             Both governments said the talks were constructive and would continue next week. \
             Trade across the Wagah border crossing remains suspended for now.",
            "https://example.com/ceasefire",
        ),
        Article::new(
            "Drone sighted near Kashmir",
            "Military officials in Kashmir reported a drone sighting near a forward post late on Sunday. \
             No casualties were reported, although residents of nearby villages were briefly evacuated. \
             Analysts say the incident highlights growing tension over surveillance technology.",
            "https://example.com/drone",
        ),
    ]
}

#[test]
fn test_no_articles_message() {
    assert_eq!(rank_and_summarize(&[]), NO_ARTICLES_MESSAGE);
}

#[test]
fn test_no_readable_content() {
    let articles = vec![Article::new("Kashmir update", "  \n ", "https://example.com/a")];
    assert_eq!(rank_and_summarize(&articles), NO_READABLE_CONTENT_MESSAGE);
}

#[test]
fn test_summary_structure() {
    let summary = rank_and_summarize(&sample_articles());
    assert!(summary.starts_with(THEME_RULES[0].intro));
    assert!(summary.contains("Recent developments indicate that "));
    assert!(summary.contains("Additionally, "));
    assert!(summary.ends_with(['.', '!', '?']));
    assert!(!summary.contains("Islamabad, Pakistan –"));
}

#[test]
fn test_short_bodies_fall_back_to_intro() {
    let articles = vec![Article::new("Taliban envoy visits", "Brief note.", "u")];
    let summary = rank_and_summarize(&articles);
    assert_eq!(summary, format!("{} {}", THEME_RULES[3].intro, composer::EMERGING_CLOSING));
}

#[test]
fn test_non_empty_input_always_ends_with_punctuation() {
    let cases = vec![
        vec![Article::new("x", "One sentence that is just long enough", "u")],
        vec![Article::new("China", "Short. Also short", "u")],
        sample_articles(),
    ];
    for articles in cases {
        let summary = rank_and_summarize(&articles);
        assert!(!summary.is_empty());
        assert!(summary.ends_with(['.', '!', '?']), "bad ending: {}", summary);
    }
}

#[test]
fn test_summary_is_idempotent() {
    let articles = sample_articles();
    assert_eq!(rank_and_summarize(&articles), rank_and_summarize(&articles));
}

#[test]
fn test_impact_sentences() {
    let texts = [
        "Two civilians were injured in the shelling overnight. Weather was clear.",
        "Economic losses from the trade halt are mounting quickly. Officials killed time.",
    ];
    assert_eq!(
        extract_impact_sentences(&texts),
        vec![
            "Two civilians were injured in the shelling overnight",
            "Economic losses from the trade halt are mounting quickly"
        ]
    );
    let empty: [&str; 0] = [];
    assert!(extract_impact_sentences(&empty).is_empty());
}

use super::*;
use crate::article::Article;
use crate::extraction::FallbackReason;

fn names(hotspots: &[Hotspot]) -> Vec<&str> {
    hotspots.iter().map(|h| h.name.as_str()).collect()
}

#[test]
fn test_defaults_on_empty_input() {
    let extraction = HotspotExtractor::new().extract(&[]);
    assert_eq!(extraction.fallback_reason(), Some(FallbackReason::InsufficientInput));

    let hotspots = extract_hotspots(&[]);
    assert_eq!(names(&hotspots), vec!["Kashmir", "Line of Control", "Balochistan"]);
    assert_eq!(hotspots[0].intensity, Intensity::High);
    assert_eq!(hotspots[0].incidents, 3);
    assert_eq!(hotspots[1].intensity, Intensity::Medium);
    assert_eq!(hotspots[1].location_type, LocationType::Border);
    assert_eq!(hotspots[2].intensity, Intensity::Low);
    assert_eq!(hotspots[2].incidents, 1);
}

#[test]
fn test_defaults_when_no_place_mentioned() {
    let articles = vec![Article::new("Markets rally", "Stocks rose sharply.", "u")];
    let extraction = HotspotExtractor::new().extract(&articles);
    assert_eq!(extraction.fallback_reason(), Some(FallbackReason::NoCandidates));
    assert_eq!(extraction.into_inner(), gazetteer::default_hotspots());
}

#[test]
fn test_kashmir_with_two_conflict_keywords() {
    let articles = vec![Article::new(
        "Attack in Kashmir",
        "Two soldiers killed near the border.",
        "u",
    )];
    let hotspots = extract_hotspots(&articles);

    assert_eq!(names(&hotspots), vec!["Kashmir", "Line of Control", "Balochistan"]);
    assert_eq!(hotspots[0].intensity, Intensity::Medium);
    assert_eq!(hotspots[0].incidents, 2);
    assert_eq!(hotspots[0].description, "Recent activity detected in Kashmir");
}

#[test]
fn test_mentions_merge_by_name() {
    let articles = vec![
        Article::new(
            "Blast in Lahore",
            "Explosion and firing reported after a bomb.",
            "u1",
        ),
        Article::new("Lahore markets reopen", "Trade resumes calmly.", "u2"),
    ];
    let hotspots = extract_hotspots(&articles);

    assert_eq!(
        names(&hotspots),
        vec!["Lahore", "Kashmir", "Line of Control", "Balochistan"]
    );
    assert_eq!(hotspots[0].intensity, Intensity::High);
    assert_eq!(hotspots[0].incidents, 4);
    assert_eq!(hotspots[0].location_type, LocationType::City);
}

#[test]
fn test_intensity_upgrades_across_articles() {
    let articles = vec![
        Article::new("Karachi port", "Ships dock as usual.", "u1"),
        Article::new("Karachi", "Shelling and violence, then a strike.", "u2"),
    ];
    let hotspots = extract_hotspots(&articles);
    let karachi = hotspots.iter().find(|h| h.name == "Karachi").unwrap();
    assert_eq!(karachi.intensity, Intensity::High);
    assert_eq!(karachi.incidents, 3);
}

#[test]
fn test_names_are_unique() {
    let articles = vec![
        Article::new("Kashmir attack", "Violence in Kashmir.", "u1"),
        Article::new("Kashmir again", "Shot fired in Kashmir.", "u2"),
    ];
    let hotspots = extract_hotspots(&articles);
    let mut seen = names(&hotspots);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), hotspots.len());

    // found entries are not overwritten by the canonical default
    let kashmir = &hotspots[0];
    assert_eq!(kashmir.incidents, 3);
    assert_eq!(kashmir.intensity, Intensity::Medium);
}

#[test]
fn test_hotspots_are_idempotent() {
    let articles = vec![Article::new("Siachen patrol", "Firing reported on the glacier.", "u")];
    assert_eq!(extract_hotspots(&articles), extract_hotspots(&articles));
}

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of characters of body text kept per article
pub const MAX_ARTICLE_TEXT_CHARS: usize = 1000;

/// A news article as handed over by the fetcher.
///
/// The body is bounded to [`MAX_ARTICLE_TEXT_CHARS`] characters both when
/// built through [`Article::new`] and when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,

    #[serde(deserialize_with = "deserialize_bounded_text")]
    pub text: String,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<String>,
}

impl Article {
    pub fn new(title: &str, text: &str, url: &str) -> Self {
        Article {
            title: title.to_string(),
            text: bound_text(text),
            url: url.to_string(),
            image: None,
            publish_date: None,
        }
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    pub fn with_publish_date(mut self, publish_date: &str) -> Self {
        self.publish_date = Some(publish_date.to_string());
        self
    }

    /// Parses `publish_date` as RFC 3339, falling back to a naive ISO 8601
    /// timestamp interpreted as UTC.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.publish_date.as_deref()?.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| naive.and_utc())
    }

    /// Lowercased `title text`, the haystack every keyword matcher scans.
    pub fn combined_lowercase(&self) -> String {
        format!("{} {}", self.title, self.text).to_lowercase()
    }
}

/// Articles published within `max_age_days` of `now`, in input order.
/// Articles without a parseable date are dropped.
pub fn retain_recent(articles: Vec<Article>, max_age_days: i64, now: DateTime<Utc>) -> Vec<Article> {
    let cutoff = now - Duration::days(max_age_days.clamp(0, 36_500));
    articles
        .into_iter()
        .filter(|a| a.published_at().is_some_and(|published| published >= cutoff))
        .collect()
}

fn bound_text(text: &str) -> String {
    match text.char_indices().nth(MAX_ARTICLE_TEXT_CHARS) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

fn deserialize_bounded_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    Ok(bound_text(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_bounded() {
        let long = "x".repeat(MAX_ARTICLE_TEXT_CHARS + 50);
        let article = Article::new("Title", &long, "https://example.com/a");
        assert_eq!(article.text.chars().count(), MAX_ARTICLE_TEXT_CHARS);

        let json = format!(r#"{{"title":"t","text":"{}","url":"u"}}"#, long);
        let parsed: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text.chars().count(), MAX_ARTICLE_TEXT_CHARS);
        assert!(parsed.image.is_none());
    }

    #[test]
    fn test_bound_respects_char_boundaries() {
        let long = "é".repeat(MAX_ARTICLE_TEXT_CHARS + 1);
        let article = Article::new("t", &long, "u");
        assert_eq!(article.text.chars().count(), MAX_ARTICLE_TEXT_CHARS);
    }

    #[test]
    fn test_published_at_formats() {
        let rfc = Article::new("t", "b", "u").with_publish_date("2025-05-10T08:30:00+05:00");
        assert_eq!(
            rfc.published_at().unwrap().to_rfc3339(),
            "2025-05-10T03:30:00+00:00"
        );

        let naive = Article::new("t", "b", "u").with_publish_date("2025-05-10T08:30:00");
        assert_eq!(
            naive.published_at().unwrap().to_rfc3339(),
            "2025-05-10T08:30:00+00:00"
        );

        let junk = Article::new("t", "b", "u").with_publish_date("last tuesday");
        assert!(junk.published_at().is_none());
        assert!(Article::new("t", "b", "u").published_at().is_none());
    }

    #[test]
    fn test_retain_recent() {
        let now = DateTime::parse_from_rfc3339("2025-05-12T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let articles = vec![
            Article::new("fresh", "b", "u1").with_publish_date("2025-05-10T12:00:00Z"),
            Article::new("stale", "b", "u2").with_publish_date("2025-05-01T12:00:00Z"),
            Article::new("undated", "b", "u3"),
            Article::new("edge", "b", "u4").with_publish_date("2025-05-08 00:00:00"),
        ];
        let titles: Vec<String> = retain_recent(articles, 4, now)
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["fresh", "edge"]);
    }
}

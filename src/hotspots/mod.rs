//! Gazetteer-based geographic hotspots.

pub mod gazetteer;
#[cfg(test)]
mod tests;
pub mod types;

pub use gazetteer::{Place, CONFLICT_KEYWORDS, GAZETTEER};
pub use types::*;

use tracing::{debug, info, warn};

use crate::article::Article;
use crate::extraction::{Extraction, FallbackReason};
use crate::TARGET_HOTSPOTS;

#[derive(Debug, Clone)]
pub struct HotspotExtractor {
    places: &'static [Place],
    conflict_keywords: &'static [&'static str],
    defaults: fn() -> Vec<Hotspot>,
}

impl Default for HotspotExtractor {
    fn default() -> Self {
        Self {
            places: GAZETTEER,
            conflict_keywords: CONFLICT_KEYWORDS,
            defaults: gazetteer::default_hotspots,
        }
    }
}

impl HotspotExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct conflict keywords present in the lowercased text
    pub fn incident_count(&self, text: &str) -> u64 {
        self.conflict_keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count() as u64
    }

    pub fn extract(&self, articles: &[Article]) -> Extraction<Vec<Hotspot>> {
        let mut hotspots: Vec<Hotspot> = Vec::new();

        for (i, article) in articles.iter().enumerate() {
            let text = article.combined_lowercase();
            let incidents = self.incident_count(&text);
            let intensity = Intensity::from_keyword_hits(incidents);

            for place in self.places.iter().filter(|p| text.contains(p.key)) {
                debug!(
                    target: TARGET_HOTSPOTS,
                    "Article {} mentions {} ({} intensity, {} incidents)",
                    i + 1,
                    place.name,
                    intensity,
                    incidents
                );

                match hotspots.iter_mut().find(|h| h.name == place.name) {
                    Some(existing) => existing.merge(intensity, incidents),
                    None => hotspots.push(place.hotspot(
                        intensity,
                        incidents,
                        format!("Recent activity detected in {}", place.name),
                    )),
                }
            }
        }

        if hotspots.is_empty() {
            warn!(target: TARGET_HOTSPOTS, "No hotspots found in articles, using default hotspots");
            let reason = if articles.is_empty() {
                FallbackReason::InsufficientInput
            } else {
                FallbackReason::NoCandidates
            };
            return Extraction::Fallback((self.defaults)(), reason);
        }

        for default in (self.defaults)() {
            if !hotspots.iter().any(|h| h.name == default.name) {
                hotspots.push(default);
            }
        }

        info!(target: TARGET_HOTSPOTS, "Extracted {} geographic hotspots", hotspots.len());
        for hotspot in &hotspots {
            debug!(
                target: TARGET_HOTSPOTS,
                "  {}: {} intensity ({} incidents)",
                hotspot.name,
                hotspot.intensity,
                hotspot.incidents
            );
        }

        Extraction::Extracted(hotspots)
    }
}

/// Geographic hotspots for `articles`, always including the canonical three
pub fn extract_hotspots(articles: &[Article]) -> Vec<Hotspot> {
    HotspotExtractor::default().extract(articles).into_inner()
}

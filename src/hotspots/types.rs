use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    DisputedRegion,
    Border,
    City,
    Capital,
    Province,
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationType::DisputedRegion => write!(f, "disputed_region"),
            LocationType::Border => write!(f, "border"),
            LocationType::City => write!(f, "city"),
            LocationType::Capital => write!(f, "capital"),
            LocationType::Province => write!(f, "province"),
        }
    }
}

/// Incident intensity, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// `High` from three conflict keywords, `Medium` from one
    pub fn from_keyword_hits(hits: u64) -> Self {
        match hits {
            0 => Intensity::Low,
            1 | 2 => Intensity::Medium,
            _ => Intensity::High,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Medium => write!(f, "medium"),
            Intensity::High => write!(f, "high"),
        }
    }
}

/// A named location annotated with incident activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub intensity: Intensity,
    pub incidents: u64,
    pub description: String,
}

impl Hotspot {
    /// Fold another sighting of the same place into this one: intensity
    /// only ever rises, incidents add up.
    pub fn merge(&mut self, intensity: Intensity, incidents: u64) {
        self.intensity = self.intensity.max(intensity);
        self.incidents += incidents;
    }
}

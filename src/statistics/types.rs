use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting window label attached to every report
pub const RECENT_PERIOD: &str = "7 days";

/// Qualitative level derived from a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// `High` at or above `high`, `Moderate` at or above `moderate`, else `Low`
    pub fn from_count(count: u64, moderate: u64, high: u64) -> Self {
        if count >= high {
            ActivityLevel::High
        } else if count >= moderate {
            ActivityLevel::Moderate
        } else {
            ActivityLevel::Low
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityLevel::Low => write!(f, "Low"),
            ActivityLevel::Moderate => write!(f, "Moderate"),
            ActivityLevel::High => write!(f, "High"),
        }
    }
}

/// Article categories counted at most once per article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentCategory {
    Military,
    Diplomatic,
    Border,
}

impl fmt::Display for IncidentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentCategory::Military => write!(f, "military"),
            IncidentCategory::Diplomatic => write!(f, "diplomatic"),
            IncidentCategory::Border => write!(f, "border"),
        }
    }
}

/// Aggregate incident statistics over an article batch.
///
/// `total_casualties` is accumulated per article as deaths plus injuries,
/// so it always equals `deaths + injuries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub total_casualties: u64,
    pub deaths: u64,
    pub injuries: u64,
    pub military_incidents: u64,
    pub diplomatic_meetings: u64,
    pub border_violations: u64,
    pub economic_impact: Vec<f64>,
    pub key_developments: u64,
    pub recent_period: String,
    pub avg_casualties_per_incident: f64,
    pub diplomatic_activity_level: ActivityLevel,
    pub conflict_intensity: ActivityLevel,
}

impl Default for StatisticsReport {
    fn default() -> Self {
        Self {
            total_casualties: 0,
            deaths: 0,
            injuries: 0,
            military_incidents: 0,
            diplomatic_meetings: 0,
            border_violations: 0,
            economic_impact: Vec::new(),
            key_developments: 0,
            recent_period: RECENT_PERIOD.to_string(),
            avg_casualties_per_incident: 0.0,
            diplomatic_activity_level: ActivityLevel::Low,
            conflict_intensity: ActivityLevel::Low,
        }
    }
}

impl StatisticsReport {
    pub fn add_casualties(&mut self, deaths: u64, injuries: u64) {
        self.deaths = self.deaths.saturating_add(deaths);
        self.injuries = self.injuries.saturating_add(injuries);
        self.total_casualties = self.deaths.saturating_add(self.injuries);
    }

    pub fn record_category(&mut self, category: IncidentCategory) {
        match category {
            IncidentCategory::Military => self.military_incidents += 1,
            IncidentCategory::Diplomatic => self.diplomatic_meetings += 1,
            IncidentCategory::Border => self.border_violations += 1,
        }
    }

    /// Fill in the fields derived from the raw counters
    pub fn finalize(&mut self) {
        let per_incident = self.total_casualties as f64 / self.military_incidents.max(1) as f64;
        self.avg_casualties_per_incident = round_one_decimal(per_incident);
        self.diplomatic_activity_level = ActivityLevel::from_count(self.diplomatic_meetings, 1, 3);
        self.conflict_intensity = ActivityLevel::from_count(self.military_incidents, 2, 4);
    }
}

/// Round to one decimal place on the exact binary value of `value`: 0.15 is
/// stored just below the tie and becomes 0.1.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_levels() {
        assert_eq!(ActivityLevel::from_count(0, 1, 3), ActivityLevel::Low);
        assert_eq!(ActivityLevel::from_count(2, 1, 3), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_count(3, 1, 3), ActivityLevel::High);
        assert_eq!(
            serde_json::to_string(&ActivityLevel::Moderate).unwrap(),
            "\"Moderate\""
        );
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
        assert_eq!(round_one_decimal(10.0 / 3.0), 3.3);
        assert_eq!(round_one_decimal(7.0), 7.0);
        assert_eq!(round_one_decimal(1.0 / 20.0), 0.1);
        assert_eq!(round_one_decimal(3.0 / 20.0), 0.1);
        assert_eq!(round_one_decimal(7.0 / 20.0), 0.3);
    }

    #[test]
    fn test_add_casualties_saturates() {
        let mut report = StatisticsReport::default();
        report.add_casualties(u64::MAX, 0);
        report.add_casualties(1, 2);
        assert_eq!(report.deaths, u64::MAX);
        assert_eq!(report.injuries, 2);
        assert_eq!(report.total_casualties, u64::MAX);
    }

    #[test]
    fn test_finalize() {
        let mut report = StatisticsReport::default();
        report.add_casualties(7, 3);
        report.military_incidents = 4;
        report.diplomatic_meetings = 1;
        report.finalize();
        assert_eq!(report.total_casualties, 10);
        assert_eq!(report.avg_casualties_per_incident, 2.5);
        assert_eq!(report.conflict_intensity, ActivityLevel::High);
        assert_eq!(report.diplomatic_activity_level, ActivityLevel::Moderate);
    }
}

use super::types::{Hotspot, Intensity, LocationType};

/// A known place, matched by substring `key` in lowercased article text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub key: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub location_type: LocationType,
}

impl Place {
    pub fn hotspot(&self, intensity: Intensity, incidents: u64, description: String) -> Hotspot {
        Hotspot {
            name: self.name.to_string(),
            lat: self.lat,
            lng: self.lng,
            location_type: self.location_type,
            intensity,
            incidents,
            description,
        }
    }
}

pub const GAZETTEER: &[Place] = &[
    Place {
        key: "kashmir",
        name: "Kashmir",
        lat: 34.0837,
        lng: 74.7973,
        location_type: LocationType::DisputedRegion,
    },
    Place {
        key: "loc",
        name: "Line of Control",
        lat: 34.0466,
        lng: 74.3982,
        location_type: LocationType::Border,
    },
    Place {
        key: "karachi",
        name: "Karachi",
        lat: 24.8607,
        lng: 67.0011,
        location_type: LocationType::City,
    },
    Place {
        key: "islamabad",
        name: "Islamabad",
        lat: 33.6844,
        lng: 73.0479,
        location_type: LocationType::Capital,
    },
    Place {
        key: "lahore",
        name: "Lahore",
        lat: 31.5497,
        lng: 74.3436,
        location_type: LocationType::City,
    },
    Place {
        key: "delhi",
        name: "New Delhi",
        lat: 28.6139,
        lng: 77.2090,
        location_type: LocationType::Capital,
    },
    Place {
        key: "mumbai",
        name: "Mumbai",
        lat: 19.0760,
        lng: 72.8777,
        location_type: LocationType::City,
    },
    Place {
        key: "balochistan",
        name: "Balochistan",
        lat: 28.1100,
        lng: 65.5400,
        location_type: LocationType::Province,
    },
    Place {
        key: "punjab",
        name: "Punjab",
        lat: 30.9010,
        lng: 73.1200,
        location_type: LocationType::Province,
    },
    Place {
        key: "siachen",
        name: "Siachen Glacier",
        lat: 35.4218,
        lng: 77.1025,
        location_type: LocationType::DisputedRegion,
    },
];

/// Each distinct keyword present counts as one incident
pub const CONFLICT_KEYWORDS: &[&str] = &[
    "attack",
    "killed",
    "bomb",
    "blast",
    "shelling",
    "firing",
    "violence",
    "incident",
    "shot",
    "wounded",
    "explosion",
    "strike",
];

/// The canonical hotspots every result carries
pub fn default_hotspots() -> Vec<Hotspot> {
    vec![
        GAZETTEER[0].hotspot(
            Intensity::High,
            3,
            "Ongoing tensions in disputed Kashmir region".to_string(),
        ),
        GAZETTEER[1].hotspot(Intensity::Medium, 2, "Border incidents along LOC".to_string()),
        GAZETTEER[7].hotspot(Intensity::Low, 1, "Regional security concerns".to_string()),
    ]
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entry::Mood;

/// Means of transport recognised in activity descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
    Boat,
    Bicycle,
    Walking,
}

impl TransportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Flight => "flight",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
            TransportMode::Boat => "boat",
            TransportMode::Bicycle => "bicycle",
            TransportMode::Walking => "walking",
        }
    }
}

/// Aggregate counters derived from a log. Never edited directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TravelStats {
    /// Kilometres between consecutive geolocated entries.
    pub total_distance: f64,
    pub countries_visited: Vec<String>,
    pub cities_visited: Vec<String>,
    pub total_days: u32,
    pub total_activities: u32,
    pub total_photos: u32,
    pub total_entries: u32,
    pub transport_modes: BTreeMap<TransportMode, u32>,
    pub mood_breakdown: BTreeMap<Mood, u32>,
}

//! Travel statistics.
//!
//! Stats are always derived in full from a log's current contents. There is
//! no incremental update path, so recomputing over an unchanged log yields
//! an identical value.

use std::collections::{BTreeMap, HashSet};

use crate::geo::haversine_km;
use crate::models::entry::{Mood, TravelLogEntry};
use crate::models::location::Location;
use crate::models::stats::{TransportMode, TravelStats};
use crate::models::travel_log::TravelLog;

/// Keyword table for transport detection. Matching is per word, after
/// lower-casing, so "trail" does not count as rail and "business" not as bus.
const TRANSPORT_KEYWORDS: &[(TransportMode, &[&str])] = &[
    (
        TransportMode::Flight,
        &["flight", "flights", "fly", "flew", "flying", "plane", "airplane", "airport"],
    ),
    (
        TransportMode::Train,
        &["train", "trains", "rail", "railway", "metro", "subway", "tram"],
    ),
    (TransportMode::Bus, &["bus", "buses", "coach"]),
    (
        TransportMode::Car,
        &["car", "cars", "drive", "drove", "driving", "taxi", "uber"],
    ),
    (
        TransportMode::Boat,
        &["boat", "boats", "ferry", "cruise", "kayak", "kayaking", "sailing"],
    ),
    (
        TransportMode::Bicycle,
        &["bike", "bikes", "biking", "bicycle", "cycling"],
    ),
    (
        TransportMode::Walking,
        &["walk", "walked", "walking", "hike", "hiked", "hiking", "trek", "trekking"],
    ),
];

/// Derive the full set of statistics for a log.
pub fn compute_stats(log: &TravelLog) -> TravelStats {
    let places = collect_places(log);

    let mut mood_breakdown = BTreeMap::new();
    for entry in &log.entries {
        *mood_breakdown.entry(entry.mood).or_insert(0) += 1;
    }

    TravelStats {
        total_distance: total_distance_km(&log.entries),
        countries_visited: places.countries.into_sorted(),
        cities_visited: places.cities.into_sorted(),
        total_days: day_count(log),
        total_activities: log.entries.iter().map(|e| e.activities.len() as u32).sum(),
        total_photos: log.entries.iter().map(|e| e.photos.len() as u32).sum(),
        total_entries: log.entries.len() as u32,
        transport_modes: tally_transport_modes(
            log.entries.iter().flat_map(|e| e.activities.iter().map(String::as_str)),
        ),
        mood_breakdown,
    }
}

/// Split an address into `(city, country)`.
///
/// The address is split on commas; tokens without any letter (postcodes,
/// street numbers) are dropped. With two or more tokens the last is the
/// country and the one before it the city. A single token is a city.
pub fn split_address(address: &str) -> (Option<&str>, Option<&str>) {
    let tokens: Vec<&str> = address
        .split(',')
        .map(str::trim)
        .filter(|t| t.chars().any(char::is_alphabetic))
        .collect();

    match tokens.as_slice() {
        [] => (None, None),
        [city] => (Some(*city), None),
        [.., city, country] => (Some(*city), Some(*country)),
    }
}

/// Count, per transport mode, how many activities mention it.
pub fn tally_transport_modes<'a>(
    activities: impl IntoIterator<Item = &'a str>,
) -> BTreeMap<TransportMode, u32> {
    let mut tally = BTreeMap::new();
    for activity in activities {
        for mode in detect_transport_modes(activity) {
            *tally.entry(mode).or_insert(0) += 1;
        }
    }
    tally
}

/// Transport modes mentioned in one activity string, each at most once.
pub fn detect_transport_modes(activity: &str) -> Vec<TransportMode> {
    let lowered = activity.to_lowercase();
    let words: HashSet<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    TRANSPORT_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| words.contains(k)))
        .map(|(mode, _)| *mode)
        .collect()
}

/// Inclusive number of calendar days covered by the log.
///
/// Uses `end_date` when set, otherwise the latest entry date. A log with
/// neither spans a single day.
pub fn day_count(log: &TravelLog) -> u32 {
    let end = log
        .end_date
        .or_else(|| log.entries.iter().map(|e| e.date).max());

    match end {
        Some(end) => inclusive_days(log.start_date, end),
        None => 1,
    }
}

fn inclusive_days(a: jiff::civil::Date, b: jiff::civil::Date) -> u32 {
    let (from, to) = if a <= b { (a, b) } else { (b, a) };
    let days = from.until(to).map(|span| span.get_days()).unwrap_or(0);
    days.unsigned_abs() + 1
}

/// Sum of great-circle legs between consecutive geolocated entries, in
/// date order, rounded to 0.1 km.
pub fn total_distance_km(entries: &[TravelLogEntry]) -> f64 {
    let mut ordered: Vec<&TravelLogEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let points: Vec<_> = ordered
        .iter()
        .filter_map(|e| e.location.as_ref().and_then(|l| l.coordinates))
        .collect();

    let km: f64 = points.windows(2).map(|w| haversine_km(w[0], w[1])).sum();
    (km * 10.0).round() / 10.0
}

/// Dominant mood across entries, if any entry exists.
pub fn dominant_mood(stats: &TravelStats) -> Option<Mood> {
    stats
        .mood_breakdown
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(mood, _)| *mood)
}

struct Places {
    cities: UniqueNames,
    countries: UniqueNames,
}

fn collect_places(log: &TravelLog) -> Places {
    let mut places = Places {
        cities: UniqueNames::default(),
        countries: UniqueNames::default(),
    };

    let entry_locations = log.entries.iter().flat_map(|e| {
        e.location
            .iter()
            .chain(e.photos.iter().filter_map(|p| p.location.as_ref()))
    });

    for location in log.locations.iter().chain(entry_locations) {
        record_location(&mut places, location);
    }

    places
}

fn record_location(places: &mut Places, location: &Location) {
    let (city, country) = split_address(&location.address);
    if let Some(city) = city {
        places.cities.insert(city);
    }
    if let Some(country) = country {
        places.countries.insert(country);
    }
}

/// Case-insensitive set that keeps the first spelling seen.
#[derive(Default)]
struct UniqueNames {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl UniqueNames {
    fn insert(&mut self, name: &str) {
        if self.seen.insert(name.to_lowercase()) {
            self.names.push(name.to_string());
        }
    }

    fn into_sorted(mut self) -> Vec<String> {
        self.names.sort_by_key(|n| n.to_lowercase());
        self.names
    }
}

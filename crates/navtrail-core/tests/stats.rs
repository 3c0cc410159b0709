use jiff::civil::date;
use uuid::Uuid;

use navtrail_core::models::entry::{Mood, TravelLogEntry};
use navtrail_core::models::location::{Coordinates, Location};
use navtrail_core::models::photo::TravelPhoto;
use navtrail_core::models::stats::TransportMode;
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog};
use navtrail_core::stats::{
    compute_stats, day_count, detect_transport_modes, split_address, total_distance_km,
};

fn location(name: &str, address: &str, coordinates: Option<(f64, f64)>) -> Location {
    Location {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
        coordinates: coordinates.map(|(lat, lng)| Coordinates { lat, lng }),
        place_id: None,
    }
}

fn entry(log: &TravelLog, day: jiff::civil::Date, activities: &[&str]) -> TravelLogEntry {
    let now = jiff::Timestamp::now();
    TravelLogEntry {
        id: Uuid::new_v4(),
        log_id: log.id,
        date: day,
        title: "Day".to_string(),
        content: String::new(),
        mood: Mood::Happy,
        weather: None,
        location: None,
        photos: Vec::new(),
        activities: activities.iter().map(|a| a.to_string()).collect(),
        created_at: now,
        updated_at: now,
    }
}

fn sample_log() -> TravelLog {
    TravelLog::new(NewTravelLog {
        title: "Japan".to_string(),
        description: "Two weeks in Japan".to_string(),
        cover_image: None,
        start_date: date(2024, 4, 1),
        end_date: Some(date(2024, 4, 14)),
        is_public: true,
        user_id: "user-1".to_string(),
        tags: vec!["asia".to_string()],
    })
}

#[test]
fn new_log_has_empty_stats_and_span() {
    let log = sample_log();
    assert_eq!(log.stats.total_entries, 0);
    assert_eq!(log.stats.total_days, 14);
    assert!(log.stats.cities_visited.is_empty());
    assert_eq!(log.stats.total_distance, 0.0);
}

#[test]
fn split_address_takes_last_two_tokens() {
    assert_eq!(
        split_address("1-2 Jingumae, Shibuya, Tokyo, Japan"),
        (Some("Tokyo"), Some("Japan"))
    );
    assert_eq!(split_address("Kyoto"), (Some("Kyoto"), None));
    assert_eq!(split_address(""), (None, None));
}

#[test]
fn split_address_skips_numeric_tokens() {
    assert_eq!(
        split_address("Rue de Rivoli, Paris, 75001, France"),
        (Some("Paris"), Some("France"))
    );
}

#[test]
fn cities_and_countries_are_deduplicated() {
    let mut log = sample_log();
    log.locations.push(location("Shrine", "Meiji Jingu, Tokyo, Japan", None));
    log.locations.push(location("Tower", "Minato, tokyo, JAPAN", None));
    log.locations.push(location("Temple", "Higashiyama, Kyoto, Japan", None));

    let stats = compute_stats(&log);
    assert_eq!(stats.cities_visited, vec!["Kyoto", "Tokyo"]);
    assert_eq!(stats.countries_visited, vec!["Japan"]);
}

#[test]
fn photo_locations_count_towards_places() {
    let mut log = sample_log();
    let mut e = entry(&log, date(2024, 4, 2), &[]);
    e.photos.push(TravelPhoto {
        id: Uuid::new_v4(),
        url: "https://img.example/1.jpg".to_string(),
        caption: None,
        location: Some(location("Pier", "Busan, South Korea", None)),
        timestamp: None,
        width: None,
        height: None,
    });
    log.entries.push(e);

    let stats = compute_stats(&log);
    assert_eq!(stats.countries_visited, vec!["South Korea"]);
    assert_eq!(stats.total_photos, 1);
}

#[test]
fn transport_detection_is_word_based() {
    assert_eq!(
        detect_transport_modes("Took the bullet train, then a taxi"),
        vec![TransportMode::Train, TransportMode::Car]
    );
    assert!(detect_transport_modes("Walked the mountain trail").contains(&TransportMode::Walking));
    assert!(!detect_transport_modes("Walked the mountain trail").contains(&TransportMode::Train));
    assert!(detect_transport_modes("Business lunch").is_empty());
}

#[test]
fn activities_and_transport_modes_are_tallied() {
    let mut log = sample_log();
    let e1 = entry(&log, date(2024, 4, 1), &["Flight to Tokyo", "Metro to hotel"]);
    let e2 = entry(&log, date(2024, 4, 3), &["Ferry to Miyajima", "Hiking", "Train back"]);
    log.entries.push(e1);
    log.entries.push(e2);

    let stats = compute_stats(&log);
    assert_eq!(stats.total_activities, 5);
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.transport_modes.get(&TransportMode::Train), Some(&2));
    assert_eq!(stats.transport_modes.get(&TransportMode::Flight), Some(&1));
    assert_eq!(stats.transport_modes.get(&TransportMode::Boat), Some(&1));
    assert_eq!(stats.transport_modes.get(&TransportMode::Walking), Some(&1));
    assert_eq!(stats.mood_breakdown.get(&Mood::Happy), Some(&2));
}

#[test]
fn day_count_falls_back_to_latest_entry() {
    let mut log = sample_log();
    log.end_date = None;
    assert_eq!(day_count(&log), 1);

    let e = entry(&log, date(2024, 4, 5), &[]);
    log.entries.push(e);
    assert_eq!(day_count(&log), 5);
}

#[test]
fn day_count_ignores_reversed_range() {
    let mut log = sample_log();
    log.end_date = Some(date(2024, 3, 30));
    assert_eq!(day_count(&log), 3);
}

#[test]
fn distance_follows_entry_dates() {
    let log = sample_log();
    let mut tokyo = entry(&log, date(2024, 4, 1), &[]);
    tokyo.location = Some(location("Tokyo", "Tokyo, Japan", Some((35.6762, 139.6503))));
    let mut kyoto = entry(&log, date(2024, 4, 5), &[]);
    kyoto.location = Some(location("Kyoto", "Kyoto, Japan", Some((35.0116, 135.7681))));
    let mut osaka = entry(&log, date(2024, 4, 3), &[]);
    osaka.location = Some(location("Osaka", "Osaka, Japan", Some((34.6937, 135.5023))));

    let km = total_distance_km(&[tokyo, kyoto, osaka]);
    // Tokyo -> Osaka (~397 km) -> Kyoto (~43 km)
    assert!((km - 440.0).abs() < 10.0, "unexpected distance {km}");
}

#[test]
fn recomputation_is_idempotent() {
    let mut log = sample_log();
    let mut e = entry(&log, date(2024, 4, 2), &["Bus tour", "Walk in the park"]);
    e.location = Some(location("Park", "Ueno, Tokyo, Japan", Some((35.71, 139.77))));
    log.entries.push(e);
    log.refresh_stats();

    let first = log.stats.clone();
    log.refresh_stats();
    assert_eq!(first, log.stats);
    assert_eq!(compute_stats(&log), compute_stats(&log));
}

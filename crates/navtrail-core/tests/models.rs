use jiff::civil::date;
use serde_json::json;
use uuid::Uuid;

use navtrail_core::models::entry::{EntryPatch, Mood, NewEntry};
use navtrail_core::models::generated::Generated;
use navtrail_core::models::location::{Location, LocationInput};
use navtrail_core::models::source::DataSource;
use navtrail_core::models::stats::{TransportMode, TravelStats};
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog, TravelLogPatch};

fn input(name: &str, address: &str) -> LocationInput {
    LocationInput {
        id: None,
        name: name.to_string(),
        address: address.to_string(),
        coordinates: None,
        place_id: None,
    }
}

#[test]
fn log_serializes_with_camel_case_fields() {
    let log = TravelLog::new(NewTravelLog {
        title: "Andes".to_string(),
        description: String::new(),
        cover_image: None,
        start_date: date(2024, 9, 1),
        end_date: None,
        is_public: false,
        user_id: "carol".to_string(),
        tags: Vec::new(),
    });

    let value = serde_json::to_value(&log).unwrap();
    assert_eq!(value["startDate"], "2024-09-01");
    assert_eq!(value["userId"], "carol");
    assert_eq!(value["isPublic"], false);
    assert_eq!(value["stats"]["totalDays"], 1);
    assert!(value.get("start_date").is_none());
}

#[test]
fn stats_maps_use_lowercase_keys() {
    let mut stats = TravelStats::default();
    stats.transport_modes.insert(TransportMode::Train, 2);
    stats.mood_breakdown.insert(Mood::Adventurous, 1);

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["transportModes"], json!({"train": 2}));
    assert_eq!(value["moodBreakdown"], json!({"adventurous": 1}));
}

#[test]
fn as_str_matches_wire_names() {
    let moods = [
        Mood::Happy,
        Mood::Excited,
        Mood::Relaxed,
        Mood::Neutral,
        Mood::Tired,
        Mood::Sad,
        Mood::Adventurous,
    ];
    for mood in moods {
        assert_eq!(json!(mood), json!(mood.as_str()));
    }

    let modes = [
        TransportMode::Flight,
        TransportMode::Train,
        TransportMode::Bus,
        TransportMode::Car,
        TransportMode::Boat,
        TransportMode::Bicycle,
        TransportMode::Walking,
    ];
    for mode in modes {
        assert_eq!(json!(mode), json!(mode.as_str()));
    }
}

#[test]
fn patches_tell_null_from_absent() {
    let absent: TravelLogPatch = serde_json::from_value(json!({"title": "New"})).unwrap();
    assert_eq!(absent.end_date, None);
    assert_eq!(absent.cover_image, None);

    let cleared: TravelLogPatch =
        serde_json::from_value(json!({"endDate": null, "coverImage": null})).unwrap();
    assert_eq!(cleared.end_date, Some(None));
    assert_eq!(cleared.cover_image, Some(None));

    let set: TravelLogPatch = serde_json::from_value(json!({"endDate": "2024-06-20"})).unwrap();
    assert_eq!(set.end_date, Some(Some(date(2024, 6, 20))));

    let entry: EntryPatch = serde_json::from_value(json!({
        "weather": null,
        "location": {"name": "Pier", "address": "Busan, South Korea"}
    }))
    .unwrap();
    assert!(matches!(entry.weather, Some(None)));
    assert_eq!(entry.location.map(|l| l.map(|l| l.name)), Some(Some("Pier".to_string())));
}

#[test]
fn new_entry_defaults_optional_fields() {
    let entry: NewEntry =
        serde_json::from_value(json!({"date": "2024-09-02", "title": "Cusco"})).unwrap();
    assert_eq!(entry.mood, Mood::Neutral);
    assert!(entry.activities.is_empty());
    assert!(entry.location.is_none());
}

#[test]
fn generated_and_source_wire_shape() {
    let value = serde_json::to_value(Generated::mock(DataSource::Live)).unwrap();
    assert_eq!(value, json!({"output": "live", "mock": true}));
}

#[test]
fn location_matching_rules() {
    let known = input("Machu Picchu", "Aguas Calientes, Peru").into_location();

    assert!(known.matches(&input("machu picchu", "AGUAS CALIENTES, PERU")));
    assert!(!known.matches(&input("Machu Picchu", "Cusco, Peru")));

    let by_id = LocationInput {
        id: Some(known.id),
        ..input("Renamed", "Elsewhere")
    };
    assert!(known.matches(&by_id));

    let with_place = Location {
        place_id: Some("ChIJ123".to_string()),
        ..known.clone()
    };
    let other_place = LocationInput {
        place_id: Some("ChIJ999".to_string()),
        ..input("Machu Picchu", "Aguas Calientes, Peru")
    };
    assert!(!with_place.matches(&other_place));
}

#[test]
fn into_location_keeps_supplied_id() {
    let id = Uuid::new_v4();
    let location = LocationInput {
        id: Some(id),
        ..input("Lima", "Lima, Peru")
    }
    .into_location();
    assert_eq!(location.id, id);
}

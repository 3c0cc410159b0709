//! Canned answers served when no language model is available.
//!
//! Everything here is deterministic and derived only from the request or
//! the log's computed stats, so the frontend stays usable offline.

use std::collections::{BTreeMap, HashSet};

use navtrail_core::models::chat::{ChatMessage, ChatRole};
use navtrail_core::models::entry::Mood;
use navtrail_core::models::insights::{DestinationRecommendation, TravelInsights};
use navtrail_core::models::itinerary::{
    Itinerary, ItineraryActivity, ItineraryDay, ItineraryRequest,
};
use navtrail_core::models::stats::TransportMode;
use navtrail_core::models::travel_log::TravelLog;
use navtrail_core::stats::dominant_mood;

const DEFAULT_INTERESTS: &[&str] = &["local food", "history", "nature"];

/// (name, country, reason, best time)
const DESTINATION_CATALOGUE: &[(&str, &str, &str, &str)] = &[
    ("Kyoto", "Japan", "Temples, gardens and a deep food culture.", "March to May"),
    ("Lisbon", "Portugal", "Walkable hills, coastal day trips and great value.", "April to October"),
    ("Cusco", "Peru", "Gateway to the Sacred Valley and Machu Picchu.", "May to September"),
    ("Cape Town", "South Africa", "Mountains, beaches and wine country in one trip.", "November to March"),
    ("Reykjavik", "Iceland", "Waterfalls, glaciers and the northern lights.", "September to March"),
    ("Hoi An", "Vietnam", "Lantern-lit old town and excellent street food.", "February to April"),
    ("Queenstown", "New Zealand", "Adventure sports amid alpine scenery.", "December to February"),
    ("Marrakech", "Morocco", "Souks, riads and the Atlas mountains nearby.", "March to May"),
];

pub fn chat_reply(messages: &[ChatMessage]) -> ChatMessage {
    let last = messages
        .iter()
        .rev()
        .find(|m| m.role == ChatRole::User)
        .map(|m| m.content.to_lowercase())
        .unwrap_or_default();

    let reply = if last.contains("weather") {
        "I can't check live forecasts right now, but the weather page shows current \
         conditions and a 5-day forecast for any city."
    } else if last.contains("budget") || last.contains("cost") || last.contains("money") {
        "A good rule of thumb is to split your budget into roughly 40% accommodation, \
         30% food, 20% activities and 10% transport, then adjust for your destination."
    } else if last.contains("pack") {
        "Pack light: versatile layers, comfortable walking shoes, a universal adapter, \
         copies of your documents and any medication you need."
    } else if last.contains("visa") || last.contains("passport") {
        "Visa rules depend on your nationality and destination. Check the official \
         embassy website and make sure your passport is valid for six months beyond your stay."
    } else if last.contains("itinerary") || last.contains("plan") {
        "Try the itinerary planner: tell it your destination, number of days and \
         interests and it will draft a day-by-day plan."
    } else {
        "I'm running in offline mode, so my answers are limited. Ask me about budgets, \
         packing, visas or planning an itinerary."
    };

    ChatMessage::assistant(reply)
}

pub fn itinerary(req: &ItineraryRequest) -> Itinerary {
    let destination = req.destination.trim().to_string();
    let interests: Vec<&str> = if req.interests.is_empty() {
        DEFAULT_INTERESTS.to_vec()
    } else {
        req.interests.iter().map(String::as_str).collect()
    };

    let days = (1..=req.days)
        .map(|day| {
            let focus = interests[(day as usize - 1) % interests.len()];
            let title = if day == 1 {
                format!("Arrival and first look at {destination}")
            } else if day == req.days {
                format!("Last day in {destination}")
            } else {
                format!("Exploring {focus}")
            };
            ItineraryDay {
                day,
                title,
                activities: vec![
                    activity("09:00", format!("Morning {focus} outing"), &destination),
                    activity("13:00", "Lunch at a local favourite".to_string(), &destination),
                    activity("15:00", format!("Afternoon exploring {focus}"), &destination),
                    activity("19:30", "Dinner and an evening stroll".to_string(), &destination),
                ],
            }
        })
        .collect();

    Itinerary {
        destination,
        days,
        tips: vec![
            "Book popular attractions in advance.".to_string(),
            "Keep a little local cash for small vendors.".to_string(),
        ],
    }
}

fn activity(time: &str, what: String, destination: &str) -> ItineraryActivity {
    ItineraryActivity {
        time: time.to_string(),
        activity: what,
        location: Some(destination.to_string()),
        notes: None,
    }
}

pub fn insights(log: &TravelLog) -> TravelInsights {
    let stats = &log.stats;

    let mut summary = format!(
        "Over {} day{} you wrote {} entr{}",
        stats.total_days,
        plural(stats.total_days, "", "s"),
        stats.total_entries,
        plural(stats.total_entries, "y", "ies"),
    );
    if !stats.cities_visited.is_empty() {
        summary.push_str(&format!(
            " covering {} cit{} in {} countr{}",
            stats.cities_visited.len(),
            plural(stats.cities_visited.len() as u32, "y", "ies"),
            stats.countries_visited.len().max(1),
            plural(stats.countries_visited.len().max(1) as u32, "y", "ies"),
        ));
    }
    summary.push('.');

    let highlights = log
        .entries
        .iter()
        .filter(|e| matches!(e.mood, Mood::Happy | Mood::Excited | Mood::Adventurous))
        .chain(log.entries.iter())
        .map(|e| e.title.clone())
        .fold(Vec::new(), |mut acc, t| {
            if !acc.contains(&t) {
                acc.push(t);
            }
            acc
        })
        .into_iter()
        .take(3)
        .collect();

    TravelInsights {
        summary,
        highlights,
        recommendations: vec![
            "Add photos to your entries to capture more of the trip.".to_string(),
            "Tag your logs so similar trips are easy to find later.".to_string(),
        ],
        travel_style: travel_style(log),
        favorite_activities: favorite_activities(log, 3),
    }
}

fn travel_style(log: &TravelLog) -> String {
    let stats = &log.stats;
    let top_mode = stats
        .transport_modes
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(mode, _)| *mode);

    match (top_mode, dominant_mood(stats)) {
        (Some(TransportMode::Walking | TransportMode::Bicycle), _) => "Active explorer",
        (Some(TransportMode::Flight), _) => "Globetrotter",
        (Some(TransportMode::Train | TransportMode::Bus), _) => "Overland traveller",
        (Some(TransportMode::Car), _) => "Road tripper",
        (Some(TransportMode::Boat), _) => "Island hopper",
        (None, Some(Mood::Relaxed)) => "Slow traveller",
        (None, Some(Mood::Adventurous | Mood::Excited)) => "Adventurer",
        _ => "Curious traveller",
    }
    .to_string()
}

/// Most frequent activities, ties broken alphabetically.
fn favorite_activities(log: &TravelLog, limit: usize) -> Vec<String> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for activity in log.entries.iter().flat_map(|e| e.activities.iter()) {
        *counts.entry(activity.trim().to_string()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(limit).map(|(a, _)| a).collect()
}

/// Catalogue destinations in countries the traveller has not been to.
pub fn recommendations(logs: &[TravelLog]) -> Vec<DestinationRecommendation> {
    let visited: HashSet<String> = logs
        .iter()
        .flat_map(|l| l.stats.countries_visited.iter().map(|c| c.to_lowercase()))
        .collect();

    DESTINATION_CATALOGUE
        .iter()
        .filter(|(_, country, _, _)| !visited.contains(&country.to_lowercase()))
        .take(3)
        .map(|(name, country, reason, best)| DestinationRecommendation {
            name: name.to_string(),
            country: country.to_string(),
            reason: reason.to_string(),
            best_time_to_visit: Some(best.to_string()),
        })
        .collect()
}

fn plural(n: u32, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

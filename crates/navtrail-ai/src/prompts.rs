use std::collections::BTreeSet;
use std::fmt::Write;

use navtrail_core::models::itinerary::ItineraryRequest;
use navtrail_core::models::travel_log::TravelLog;

use crate::context::build_log_context;

pub const TRAVEL_ASSISTANT_PROMPT: &str = "\
You are NavTrail, a friendly and knowledgeable travel assistant. \
Help travellers plan trips, suggest destinations, explain local customs, \
and give practical advice on transport, budget and safety. \
Keep answers concise and concrete. If a travel log is provided, use it to \
personalise your answer.";

pub const ITINERARY_SYSTEM_PROMPT: &str = "\
You are an expert travel planner. Respond ONLY with a JSON object of the form \
{\"destination\": string, \"days\": [{\"day\": number, \"title\": string, \
\"activities\": [{\"time\": string, \"activity\": string, \"location\": string, \
\"notes\": string}]}], \"tips\": [string]}. Do not add commentary.";

pub const INSIGHTS_SYSTEM_PROMPT: &str = "\
You analyse travel journals. Respond ONLY with a JSON object of the form \
{\"summary\": string, \"highlights\": [string], \"recommendations\": [string], \
\"travelStyle\": string, \"favoriteActivities\": [string]}. Do not add commentary.";

pub const RECOMMENDATIONS_SYSTEM_PROMPT: &str = "\
You recommend travel destinations. Respond ONLY with a JSON array of objects \
of the form {\"name\": string, \"country\": string, \"reason\": string, \
\"bestTimeToVisit\": string}. Recommend places the traveller has not visited.";

/// System prompt for chat, with the log context appended when given.
pub fn chat_system_prompt(log: Option<&TravelLog>) -> String {
    match log {
        Some(log) => format!("{TRAVEL_ASSISTANT_PROMPT}\n\n{}", build_log_context(log)),
        None => TRAVEL_ASSISTANT_PROMPT.to_string(),
    }
}

pub fn itinerary_prompt(req: &ItineraryRequest) -> String {
    let mut prompt = format!(
        "Create a {}-day itinerary for {}.",
        req.days,
        req.destination.trim()
    );
    if !req.interests.is_empty() {
        let _ = write!(prompt, " Interests: {}.", req.interests.join(", "));
    }
    if let Some(budget) = req.budget.as_deref().filter(|b| !b.trim().is_empty()) {
        let _ = write!(prompt, " Budget: {budget}.");
    }
    if let Some(style) = req.travel_style.as_deref().filter(|s| !s.trim().is_empty()) {
        let _ = write!(prompt, " Travel style: {style}.");
    }
    prompt.push_str(" Include morning, afternoon and evening activities for each day.");
    prompt
}

pub fn insights_prompt(log: &TravelLog) -> String {
    format!(
        "Analyse this travel log and describe the traveller's experience, \
         highlights, travel style and what they might enjoy next.\n\n{}",
        build_log_context(log)
    )
}

/// Prompt for destination recommendations built from a traveller's history.
pub fn recommendations_prompt(logs: &[TravelLog], preferences: Option<&str>) -> String {
    let countries: BTreeSet<&str> = logs
        .iter()
        .flat_map(|l| l.stats.countries_visited.iter().map(String::as_str))
        .collect();
    let cities: BTreeSet<&str> = logs
        .iter()
        .flat_map(|l| l.stats.cities_visited.iter().map(String::as_str))
        .collect();
    let tags: BTreeSet<&str> = logs
        .iter()
        .flat_map(|l| l.tags.iter().map(String::as_str))
        .collect();
    let total_days: u32 = logs.iter().map(|l| l.stats.total_days).sum();

    let mut prompt = String::from("Recommend 3 travel destinations for this traveller.\n");
    let _ = writeln!(prompt, "trips: {}", logs.len());
    let _ = writeln!(prompt, "days travelled: {total_days}");
    if !countries.is_empty() {
        let _ = writeln!(prompt, "countries visited: {}", join(&countries));
    }
    if !cities.is_empty() {
        let _ = writeln!(prompt, "cities visited: {}", join(&cities));
    }
    if !tags.is_empty() {
        let _ = writeln!(prompt, "trip tags: {}", join(&tags));
    }
    if let Some(prefs) = preferences.filter(|p| !p.trim().is_empty()) {
        let _ = writeln!(prompt, "preferences: {}", prefs.trim());
    }
    prompt
}

fn join(set: &BTreeSet<&str>) -> String {
    set.iter().copied().collect::<Vec<_>>().join(", ")
}

//! Log context builder for prompts.
//!
//! Renders a travel log (metadata, computed stats and a bounded digest of
//! its entries) into an XML-style block that is embedded in prompts so the
//! model can ground its answer in what the traveller actually did.

use std::fmt::Write;

use navtrail_core::models::stats::TravelStats;
use navtrail_core::models::travel_log::TravelLog;

use crate::extract::truncate;

/// At most this many entries are rendered; later ones are summarised by count.
pub const MAX_CONTEXT_ENTRIES: usize = 20;
/// Entry content is cut to this many characters.
pub const MAX_ENTRY_CHARS: usize = 280;

/// Build the `<travel_log>` block for a single log.
pub fn build_log_context(log: &TravelLog) -> String {
    let mut block = String::from("<travel_log>\n");

    let _ = writeln!(block, "title: {}", log.title);
    if !log.description.trim().is_empty() {
        let _ = writeln!(block, "description: {}", log.description.trim());
    }
    match log.end_date {
        Some(end) => {
            let _ = writeln!(block, "dates: {} to {}", log.start_date, end);
        }
        None => {
            let _ = writeln!(block, "dates: from {}", log.start_date);
        }
    }
    if !log.tags.is_empty() {
        let _ = writeln!(block, "tags: {}", log.tags.join(", "));
    }

    block.push_str(&render_stats(&log.stats));

    let mut entries: Vec<_> = log.entries.iter().collect();
    entries.sort_by_key(|e| e.date);

    for entry in entries.iter().take(MAX_CONTEXT_ENTRIES) {
        let _ = write!(
            block,
            "<entry date=\"{}\" mood=\"{}\"",
            entry.date,
            entry.mood.as_str()
        );
        if let Some(location) = &entry.location {
            let _ = write!(block, " location=\"{}\"", location.address);
        }
        block.push_str(">\n");
        let _ = writeln!(block, "{}", entry.title);
        let content = entry.content.trim();
        if !content.is_empty() {
            let _ = writeln!(block, "{}", truncate(content, MAX_ENTRY_CHARS));
        }
        if !entry.activities.is_empty() {
            let _ = writeln!(block, "activities: {}", entry.activities.join("; "));
        }
        block.push_str("</entry>\n");
    }

    if entries.len() > MAX_CONTEXT_ENTRIES {
        let _ = writeln!(
            block,
            "({} more entries omitted)",
            entries.len() - MAX_CONTEXT_ENTRIES
        );
    }

    block.push_str("</travel_log>");
    block
}

/// Render the stats as plain `key: value` lines.
pub fn render_stats(stats: &TravelStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "days: {}", stats.total_days);
    let _ = writeln!(out, "entries: {}", stats.total_entries);
    if !stats.cities_visited.is_empty() {
        let _ = writeln!(out, "cities: {}", stats.cities_visited.join(", "));
    }
    if !stats.countries_visited.is_empty() {
        let _ = writeln!(out, "countries: {}", stats.countries_visited.join(", "));
    }
    let _ = writeln!(out, "activities: {}", stats.total_activities);
    let _ = writeln!(out, "photos: {}", stats.total_photos);
    if stats.total_distance > 0.0 {
        let _ = writeln!(out, "distance_km: {:.1}", stats.total_distance);
    }
    if !stats.transport_modes.is_empty() {
        let modes: Vec<String> = stats
            .transport_modes
            .iter()
            .map(|(mode, count)| format!("{}={count}", mode.as_str()))
            .collect();
        let _ = writeln!(out, "transport: {}", modes.join(", "));
    }
    out
}

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use jiff::civil::date;
use uuid::Uuid;

use navtrail_ai::error::AiError;
use navtrail_ai::model::LanguageModel;
use navtrail_core::models::chat::ChatMessage;
use navtrail_core::models::entry::{Mood, TravelLogEntry};
use navtrail_core::models::location::Location;
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog};

/// Model that answers every call with the same canned result and records
/// the prompts it was given.
pub struct StubModel {
    reply: Result<String, String>,
    pub calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl StubModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_system_prompt(&self) -> String {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(system, _)| system.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    fn model_id(&self) -> &str {
        "stub-model"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        messages: &[ChatMessage],
    ) -> Result<String, AiError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), messages.to_vec()));
        self.reply.clone().map_err(AiError::Invocation)
    }
}

/// A two-entry trip through Lisbon and Porto.
pub fn portugal_log() -> TravelLog {
    let mut log = TravelLog::new(NewTravelLog {
        title: "Portugal by rail".to_string(),
        description: "Ten days of pastel de nata".to_string(),
        cover_image: None,
        start_date: date(2024, 6, 1),
        end_date: Some(date(2024, 6, 10)),
        is_public: true,
        user_id: "alice".to_string(),
        tags: vec!["europe".to_string(), "food".to_string()],
    });

    let lisbon = location("Alfama", "Alfama, Lisbon, Portugal");
    let porto = location("Ribeira", "Ribeira, Porto, Portugal");
    log.entries.push(entry(
        &log,
        date(2024, 6, 2),
        "Trams and viewpoints",
        Mood::Excited,
        lisbon.clone(),
        &["Tram 28 ride", "Walking tour"],
    ));
    log.entries.push(entry(
        &log,
        date(2024, 6, 6),
        "Port cellars",
        Mood::Relaxed,
        porto.clone(),
        &["Walking tour", "Port tasting"],
    ));
    log.locations = vec![lisbon, porto];
    log.refresh_stats();
    log
}

fn location(name: &str, address: &str) -> Location {
    Location {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
        coordinates: None,
        place_id: None,
    }
}

fn entry(
    log: &TravelLog,
    day: jiff::civil::Date,
    title: &str,
    mood: Mood,
    location: Location,
    activities: &[&str],
) -> TravelLogEntry {
    TravelLogEntry {
        id: Uuid::new_v4(),
        log_id: log.id,
        date: day,
        title: title.to_string(),
        content: format!("Notes about {title}"),
        mood,
        weather: None,
        location: Some(location),
        photos: Vec::new(),
        activities: activities.iter().map(|a| a.to_string()).collect(),
        created_at: log.created_at,
        updated_at: log.created_at,
    }
}

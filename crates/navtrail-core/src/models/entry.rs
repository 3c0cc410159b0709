use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::location::{Location, LocationInput};
use super::nullable;
use super::photo::{NewPhoto, TravelPhoto};
use super::weather::WeatherSnapshot;

/// How the author felt on the day of an entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mood {
    Happy,
    Excited,
    Relaxed,
    #[default]
    Neutral,
    Tired,
    Sad,
    Adventurous,
}

impl Mood {
    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Relaxed => "relaxed",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
            Mood::Sad => "sad",
            Mood::Adventurous => "adventurous",
        }
    }
}

/// A single dated entry in a travel log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TravelLogEntry {
    pub id: Uuid,
    pub log_id: Uuid,
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    pub title: String,
    pub content: String,
    pub mood: Mood,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub photos: Vec<TravelPhoto>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[ts(type = "string")]
    pub created_at: jiff::Timestamp,
    #[ts(type = "string")]
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewEntry {
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub location: Option<LocationInput>,
    #[serde(default)]
    pub photos: Vec<NewPhoto>,
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Partial update of an entry. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EntryPatch {
    #[serde(default)]
    #[ts(type = "string | null")]
    pub date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mood: Option<Mood>,
    /// `null` clears the recorded weather.
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional = nullable, as = "Option<WeatherSnapshot>")]
    pub weather: Option<Option<WeatherSnapshot>>,
    /// `null` detaches the entry from its location.
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional = nullable, as = "Option<LocationInput>")]
    pub location: Option<Option<LocationInput>>,
    #[serde(default)]
    pub activities: Option<Vec<String>>,
}

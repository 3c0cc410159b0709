use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::entry::TravelLogEntry;
use super::location::Location;
use super::nullable;
use super::stats::TravelStats;
use crate::stats::compute_stats;

/// A user-authored record of a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TravelLog {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[ts(type = "string")]
    pub start_date: jiff::civil::Date,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub end_date: Option<jiff::civil::Date>,
    pub is_public: bool,
    pub user_id: String,
    #[ts(type = "string")]
    pub created_at: jiff::Timestamp,
    #[ts(type = "string")]
    pub updated_at: jiff::Timestamp,
    pub entries: Vec<TravelLogEntry>,
    pub locations: Vec<Location>,
    pub stats: TravelStats,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewTravelLog {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[ts(type = "string")]
    pub start_date: jiff::civil::Date,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub end_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub is_public: bool,
    pub user_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update of log metadata. Entries are edited through their own
/// operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TravelLogPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `null` removes the cover image.
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional = nullable, as = "Option<String>")]
    pub cover_image: Option<Option<String>>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub start_date: Option<jiff::civil::Date>,
    /// `null` makes the log open-ended again.
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional = nullable, type = "string | null")]
    pub end_date: Option<Option<jiff::civil::Date>>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl TravelLog {
    /// Build a fresh log with no entries and freshly computed stats.
    pub fn new(input: NewTravelLog) -> Self {
        let now = jiff::Timestamp::now();
        let mut log = Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            cover_image: input.cover_image,
            start_date: input.start_date,
            end_date: input.end_date,
            is_public: input.is_public,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
            entries: Vec::new(),
            locations: Vec::new(),
            stats: TravelStats::default(),
            tags: input.tags,
        };
        log.refresh_stats();
        log
    }

    /// Recompute `stats` from scratch.
    pub fn refresh_stats(&mut self) {
        self.stats = compute_stats(self);
    }

    pub fn entry(&self, entry_id: Uuid) -> Option<&TravelLogEntry> {
        self.entries.iter().find(|e| e.id == entry_id)
    }

    pub fn entry_mut(&mut self, entry_id: Uuid) -> Option<&mut TravelLogEntry> {
        self.entries.iter_mut().find(|e| e.id == entry_id)
    }
}

use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use navtrail_core::models::entry::{EntryPatch, NewEntry, TravelLogEntry};
use navtrail_core::models::photo::{NewPhoto, TravelPhoto};
use navtrail_core::models::stats::TravelStats;
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog, TravelLogPatch};

use crate::error::StorageError;
use crate::mutate;

/// In-memory collection of every travel log known to this process.
///
/// Reads take a shared lock and return clones; each mutation holds the
/// write lock for its full duration, so stats never lag behind entries.
#[derive(Debug, Default)]
pub struct LogStore {
    logs: RwLock<Vec<TravelLog>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All logs, optionally restricted to one owner, newest first.
    pub async fn list_logs(&self, user_id: Option<&str>) -> Vec<TravelLog> {
        let logs = self.logs.read().await;
        let mut out: Vec<TravelLog> = logs
            .iter()
            .filter(|l| user_id.is_none_or(|u| l.user_id == u))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    pub async fn list_public_logs(&self) -> Vec<TravelLog> {
        let logs = self.logs.read().await;
        let mut out: Vec<TravelLog> = logs.iter().filter(|l| l.is_public).cloned().collect();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        out
    }

    pub async fn get_log(&self, id: Uuid) -> Result<TravelLog, StorageError> {
        let logs = self.logs.read().await;
        logs.iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or(StorageError::LogNotFound { id })
    }

    /// Case-insensitive match against title, description and tags.
    pub async fn search_logs(&self, query: &str) -> Vec<TravelLog> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let logs = self.logs.read().await;
        logs.iter()
            .filter(|l| {
                l.title.to_lowercase().contains(&needle)
                    || l.description.to_lowercase().contains(&needle)
                    || l.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    pub async fn create_log(&self, input: NewTravelLog) -> Result<TravelLog, StorageError> {
        mutate::validate_new_log(&input)?;
        let log = TravelLog::new(input);

        self.logs.write().await.push(log.clone());
        info!(log_id = %log.id, user_id = %log.user_id, "travel log created");
        Ok(log)
    }

    pub async fn update_log(
        &self,
        id: Uuid,
        patch: TravelLogPatch,
    ) -> Result<TravelLog, StorageError> {
        let log = self
            .with_log(id, |log| {
                mutate::apply_log_patch(log, patch)?;
                Ok(log.clone())
            })
            .await?;
        info!(log_id = %id, "travel log updated");
        Ok(log)
    }

    pub async fn delete_log(&self, id: Uuid) -> Result<(), StorageError> {
        let mut logs = self.logs.write().await;
        let before = logs.len();
        logs.retain(|l| l.id != id);
        if logs.len() == before {
            return Err(StorageError::LogNotFound { id });
        }
        info!(log_id = %id, "travel log deleted");
        Ok(())
    }

    pub async fn add_entry(
        &self,
        log_id: Uuid,
        input: NewEntry,
    ) -> Result<TravelLogEntry, StorageError> {
        let entry = self
            .with_log(log_id, |log| mutate::insert_entry(log, input))
            .await?;
        info!(log_id = %log_id, entry_id = %entry.id, "entry added");
        Ok(entry)
    }

    pub async fn update_entry(
        &self,
        log_id: Uuid,
        entry_id: Uuid,
        patch: EntryPatch,
    ) -> Result<TravelLogEntry, StorageError> {
        let entry = self
            .with_log(log_id, |log| mutate::patch_entry(log, entry_id, patch))
            .await?;
        info!(log_id = %log_id, entry_id = %entry_id, "entry updated");
        Ok(entry)
    }

    pub async fn delete_entry(&self, log_id: Uuid, entry_id: Uuid) -> Result<(), StorageError> {
        self.with_log(log_id, |log| mutate::remove_entry(log, entry_id))
            .await?;
        info!(log_id = %log_id, entry_id = %entry_id, "entry deleted");
        Ok(())
    }

    pub async fn add_photo(
        &self,
        log_id: Uuid,
        entry_id: Uuid,
        input: NewPhoto,
    ) -> Result<TravelPhoto, StorageError> {
        let photo = self
            .with_log(log_id, |log| mutate::insert_photo(log, entry_id, input))
            .await?;
        info!(log_id = %log_id, entry_id = %entry_id, photo_id = %photo.id, "photo added");
        Ok(photo)
    }

    pub async fn delete_photo(
        &self,
        log_id: Uuid,
        entry_id: Uuid,
        photo_id: Uuid,
    ) -> Result<(), StorageError> {
        self.with_log(log_id, |log| mutate::remove_photo(log, entry_id, photo_id))
            .await?;
        info!(log_id = %log_id, entry_id = %entry_id, photo_id = %photo_id, "photo deleted");
        Ok(())
    }

    /// Force a full stats recomputation and return the result.
    pub async fn recalculate_stats(&self, log_id: Uuid) -> Result<TravelStats, StorageError> {
        self.with_log(log_id, |log| {
            log.refresh_stats();
            Ok(log.stats.clone())
        })
        .await
    }

    pub async fn len(&self) -> usize {
        self.logs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.logs.read().await.is_empty()
    }

    /// Run `f` against one log under the write lock.
    async fn with_log<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut TravelLog) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut logs = self.logs.write().await;
        let log = logs
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(StorageError::LogNotFound { id })?;
        f(log)
    }
}

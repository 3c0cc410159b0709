//! Pure mutations over a single [`TravelLog`].
//!
//! Every function that changes entries, photos or log metadata finishes by
//! calling [`touch`], which bumps `updated_at` and recomputes stats in full.

use std::collections::HashSet;

use jiff::Timestamp;
use uuid::Uuid;

use navtrail_core::models::entry::{EntryPatch, NewEntry, TravelLogEntry};
use navtrail_core::models::location::{Location, LocationInput};
use navtrail_core::models::photo::{NewPhoto, TravelPhoto};
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog, TravelLogPatch};

use crate::error::StorageError;

/// Check a log creation request.
pub fn validate_new_log(input: &NewTravelLog) -> Result<(), StorageError> {
    require_text("title", &input.title)?;
    require_text("userId", &input.user_id)?;
    validate_range(input.start_date, input.end_date)
}

/// Apply a metadata patch, then re-validate the result.
pub fn apply_log_patch(log: &mut TravelLog, patch: TravelLogPatch) -> Result<(), StorageError> {
    if let Some(title) = &patch.title {
        require_text("title", title)?;
    }
    validate_range(
        patch.start_date.unwrap_or(log.start_date),
        patch.end_date.unwrap_or(log.end_date),
    )?;

    if let Some(title) = patch.title {
        log.title = title;
    }
    if let Some(description) = patch.description {
        log.description = description;
    }
    if let Some(cover_image) = patch.cover_image {
        log.cover_image = cover_image;
    }
    if let Some(start_date) = patch.start_date {
        log.start_date = start_date;
    }
    if let Some(end_date) = patch.end_date {
        log.end_date = end_date;
    }
    if let Some(is_public) = patch.is_public {
        log.is_public = is_public;
    }
    if let Some(tags) = patch.tags {
        log.tags = tags;
    }

    touch(log);
    Ok(())
}

/// Append a new entry, registering its location (and its photos'
/// locations) with the log.
pub fn insert_entry(log: &mut TravelLog, input: NewEntry) -> Result<TravelLogEntry, StorageError> {
    require_text("title", &input.title)?;
    for photo in &input.photos {
        require_text("photo url", &photo.url)?;
    }

    let now = Timestamp::now();
    let location = input.location.map(|l| resolve_location(log, l));
    let photos = input
        .photos
        .into_iter()
        .map(|p| build_photo(log, p))
        .collect();

    let entry = TravelLogEntry {
        id: Uuid::new_v4(),
        log_id: log.id,
        date: input.date,
        title: input.title,
        content: input.content,
        mood: input.mood,
        weather: input.weather,
        location,
        photos,
        activities: clean_activities(input.activities),
        created_at: now,
        updated_at: now,
    };

    log.entries.push(entry.clone());
    touch(log);
    Ok(entry)
}

/// Update an entry in place. Replacing or clearing the location prunes the
/// old one if nothing else references it.
pub fn patch_entry(
    log: &mut TravelLog,
    entry_id: Uuid,
    patch: EntryPatch,
) -> Result<TravelLogEntry, StorageError> {
    if let Some(title) = &patch.title {
        require_text("title", title)?;
    }
    let log_id = log.id;
    if log.entry(entry_id).is_none() {
        return Err(StorageError::EntryNotFound { log_id, entry_id });
    }

    let new_location = patch
        .location
        .map(|input| input.map(|l| resolve_location(log, l)));
    let entry = log
        .entry_mut(entry_id)
        .ok_or(StorageError::EntryNotFound { log_id, entry_id })?;

    let mut replaced = None;
    if let Some(location) = new_location {
        replaced = std::mem::replace(&mut entry.location, location).map(|old| old.id);
    }
    if let Some(date) = patch.date {
        entry.date = date;
    }
    if let Some(title) = patch.title {
        entry.title = title;
    }
    if let Some(content) = patch.content {
        entry.content = content;
    }
    if let Some(mood) = patch.mood {
        entry.mood = mood;
    }
    if let Some(weather) = patch.weather {
        entry.weather = weather;
    }
    if let Some(activities) = patch.activities {
        entry.activities = clean_activities(activities);
    }
    entry.updated_at = Timestamp::now();
    let updated = entry.clone();

    if let Some(old_id) = replaced {
        prune_orphaned_locations(log, &[old_id]);
    }
    touch(log);
    Ok(updated)
}

/// Remove an entry and any locations only it referenced.
pub fn remove_entry(log: &mut TravelLog, entry_id: Uuid) -> Result<TravelLogEntry, StorageError> {
    let index = log
        .entries
        .iter()
        .position(|e| e.id == entry_id)
        .ok_or(StorageError::EntryNotFound {
            log_id: log.id,
            entry_id,
        })?;

    let removed = log.entries.remove(index);
    let candidates: Vec<Uuid> = removed
        .location
        .iter()
        .chain(removed.photos.iter().filter_map(|p| p.location.as_ref()))
        .map(|l| l.id)
        .collect();

    prune_orphaned_locations(log, &candidates);
    touch(log);
    Ok(removed)
}

/// Attach a photo to an entry.
pub fn insert_photo(
    log: &mut TravelLog,
    entry_id: Uuid,
    input: NewPhoto,
) -> Result<TravelPhoto, StorageError> {
    require_text("photo url", &input.url)?;
    let log_id = log.id;
    if log.entry(entry_id).is_none() {
        return Err(StorageError::EntryNotFound { log_id, entry_id });
    }

    let photo = build_photo(log, input);
    let entry = log
        .entry_mut(entry_id)
        .ok_or(StorageError::EntryNotFound { log_id, entry_id })?;
    entry.photos.push(photo.clone());
    entry.updated_at = Timestamp::now();

    touch(log);
    Ok(photo)
}

/// Detach a photo from an entry.
pub fn remove_photo(
    log: &mut TravelLog,
    entry_id: Uuid,
    photo_id: Uuid,
) -> Result<TravelPhoto, StorageError> {
    let log_id = log.id;
    let entry = log
        .entry_mut(entry_id)
        .ok_or(StorageError::EntryNotFound { log_id, entry_id })?;
    let index = entry
        .photos
        .iter()
        .position(|p| p.id == photo_id)
        .ok_or(StorageError::PhotoNotFound { entry_id, photo_id })?;

    let removed = entry.photos.remove(index);
    entry.updated_at = Timestamp::now();

    if let Some(location) = &removed.location {
        prune_orphaned_locations(log, &[location.id]);
    }
    touch(log);
    Ok(removed)
}

/// Bump `updated_at` and recompute stats.
pub fn touch(log: &mut TravelLog) {
    log.updated_at = Timestamp::now();
    log.refresh_stats();
}

/// Return the log's existing location for `input`, or register a new one.
pub fn resolve_location(log: &mut TravelLog, input: LocationInput) -> Location {
    if let Some(existing) = log.locations.iter().find(|l| l.matches(&input)) {
        return existing.clone();
    }
    let location = input.into_location();
    log.locations.push(location.clone());
    location
}

/// Drop the `candidates` that no entry or photo references any more.
///
/// Locations outside `candidates` are never touched, so places added to the
/// log directly survive even when no entry points at them.
pub fn prune_orphaned_locations(log: &mut TravelLog, candidates: &[Uuid]) {
    if candidates.is_empty() {
        return;
    }

    let referenced: HashSet<Uuid> = log
        .entries
        .iter()
        .flat_map(|e| {
            e.location
                .iter()
                .chain(e.photos.iter().filter_map(|p| p.location.as_ref()))
        })
        .map(|l| l.id)
        .collect();

    log.locations
        .retain(|l| !candidates.contains(&l.id) || referenced.contains(&l.id));
}

fn build_photo(log: &mut TravelLog, input: NewPhoto) -> TravelPhoto {
    TravelPhoto {
        id: Uuid::new_v4(),
        url: input.url,
        caption: input.caption,
        location: input.location.map(|l| resolve_location(log, l)),
        timestamp: input.timestamp,
        width: input.width,
        height: input.height,
    }
}

fn clean_activities(activities: Vec<String>) -> Vec<String> {
    activities
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}

fn require_text(field: &str, value: &str) -> Result<(), StorageError> {
    if value.trim().is_empty() {
        return Err(StorageError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn validate_range(
    start: jiff::civil::Date,
    end: Option<jiff::civil::Date>,
) -> Result<(), StorageError> {
    match end {
        Some(end) if end < start => Err(StorageError::Validation(format!(
            "end date {end} is before start date {start}"
        ))),
        _ => Ok(()),
    }
}

use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use navtrail_core::models::entry::{EntryPatch, NewEntry, TravelLogEntry};

use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::state::AppState;

pub async fn add_entry(
    State(state): State<AppState>,
    Path(log_id): Path<Uuid>,
    Json(input): Json<NewEntry>,
) -> Result<(StatusCode, Json<TravelLogEntry>), ApiError> {
    let entry = state.store.add_entry(log_id, input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path((log_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(patch): Json<EntryPatch>,
) -> Result<Json<TravelLogEntry>, ApiError> {
    Ok(Json(state.store.update_entry(log_id, entry_id, patch).await?))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((log_id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_entry(log_id, entry_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

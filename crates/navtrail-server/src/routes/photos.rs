use axum::extract::State;
use axum::http::StatusCode;
use uuid::Uuid;

use navtrail_core::models::photo::{NewPhoto, TravelPhoto};

use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::state::AppState;

pub async fn add_photo(
    State(state): State<AppState>,
    Path((log_id, entry_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<NewPhoto>,
) -> Result<(StatusCode, Json<TravelPhoto>), ApiError> {
    let photo = state.store.add_photo(log_id, entry_id, input).await?;
    Ok((StatusCode::CREATED, Json(photo)))
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path((log_id, entry_id, photo_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_photo(log_id, entry_id, photo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

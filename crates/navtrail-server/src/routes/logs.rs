use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use navtrail_core::models::stats::TravelStats;
use navtrail_core::models::travel_log::{NewTravelLog, TravelLog, TravelLogPatch};

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    user_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<TravelLog>> {
    let user_id = query.user_id.as_deref().filter(|u| !u.trim().is_empty());
    Json(state.store.list_logs(user_id).await)
}

pub async fn list_public_logs(State(state): State<AppState>) -> Json<Vec<TravelLog>> {
    Json(state.store.list_public_logs().await)
}

pub async fn search_logs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<TravelLog>> {
    Json(state.store.search_logs(&query.q).await)
}

pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TravelLog>, ApiError> {
    Ok(Json(state.store.get_log(id).await?))
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(input): Json<NewTravelLog>,
) -> Result<(StatusCode, Json<TravelLog>), ApiError> {
    let log = state.store.create_log(input).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TravelLogPatch>,
) -> Result<Json<TravelLog>, ApiError> {
    Ok(Json(state.store.update_log(id, patch).await?))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_log(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Recompute and return the stats for one log.
pub async fn log_stats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TravelStats>, ApiError> {
    Ok(Json(state.store.recalculate_stats(id).await?))
}

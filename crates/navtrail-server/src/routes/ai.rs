use axum::extract::State;
use serde::Deserialize;
use uuid::Uuid;

use navtrail_core::models::chat::ChatMessage;
use navtrail_core::models::generated::Generated;
use navtrail_core::models::insights::{DestinationRecommendation, TravelInsights};
use navtrail_core::models::itinerary::{Itinerary, ItineraryRequest};

use crate::error::ApiError;
use crate::extract::{Json, Path, Query};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    messages: Vec<ChatMessage>,
    /// Ground the reply in this log when given.
    #[serde(default)]
    log_id: Option<Uuid>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQuery {
    user_id: String,
    #[serde(default)]
    preferences: Option<String>,
}

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Generated<ChatMessage>>, ApiError> {
    let log = match req.log_id {
        Some(id) => Some(state.store.get_log(id).await?),
        None => None,
    };
    Ok(Json(state.ai.chat(&req.messages, log.as_ref()).await?))
}

pub async fn itinerary(
    State(state): State<AppState>,
    Json(req): Json<ItineraryRequest>,
) -> Result<Json<Generated<Itinerary>>, ApiError> {
    Ok(Json(state.ai.generate_itinerary(&req).await?))
}

pub async fn recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<Generated<Vec<DestinationRecommendation>>>, ApiError> {
    if query.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("userId is required".to_string()));
    }
    let logs = state.store.list_logs(Some(query.user_id.trim())).await;
    Ok(Json(
        state
            .ai
            .recommend_destinations(&logs, query.preferences.as_deref())
            .await,
    ))
}

pub async fn log_insights(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Generated<TravelInsights>>, ApiError> {
    let log = state.store.get_log(id).await?;
    Ok(Json(state.ai.generate_insights(&log).await))
}

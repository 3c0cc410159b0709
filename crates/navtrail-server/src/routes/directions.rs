use axum::extract::State;
use serde::Deserialize;

use navtrail_core::models::directions::{Route, RouteMode};
use navtrail_core::models::location::Coordinates;

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteQuery {
    from_lat: f64,
    from_lng: f64,
    to_lat: f64,
    to_lng: f64,
    #[serde(default)]
    mode: RouteMode,
}

pub async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<Route>, ApiError> {
    let from = Coordinates {
        lat: query.from_lat,
        lng: query.from_lng,
    };
    let to = Coordinates {
        lat: query.to_lat,
        lng: query.to_lng,
    };
    Ok(Json(state.directions.route(from, to, query.mode).await?))
}

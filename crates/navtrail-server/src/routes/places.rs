use axum::extract::State;
use serde::Deserialize;

use navtrail_core::models::location::Coordinates;
use navtrail_core::models::place::{GeocodeResult, PlaceSearchResults};

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    query: String,
    lat: Option<f64>,
    lng: Option<f64>,
}

#[derive(Deserialize)]
pub struct GeocodeQuery {
    address: String,
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<PlaceSearchResults>, ApiError> {
    let near = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
        _ => None,
    };
    Ok(Json(state.places.search(&params.query, near).await?))
}

pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<GeocodeResult>, ApiError> {
    Ok(Json(state.places.geocode(&params.address).await?))
}

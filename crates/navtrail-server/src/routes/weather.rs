use axum::extract::State;
use serde::Deserialize;

use navtrail_core::models::weather::{CurrentWeather, WeatherForecast};
use navtrail_providers::weather::WeatherQuery;

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct WeatherParams {
    city: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
}

impl WeatherParams {
    fn query(&self) -> Result<WeatherQuery, ApiError> {
        Ok(WeatherQuery::from_parts(self.city.as_deref(), self.lat, self.lng)?)
    }
}

pub async fn current_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<CurrentWeather>, ApiError> {
    let query = params.query()?;
    Ok(Json(state.weather.current(&query).await?))
}

pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Result<Json<WeatherForecast>, ApiError> {
    let query = params.query()?;
    Ok(Json(state.weather.forecast(&query).await?))
}

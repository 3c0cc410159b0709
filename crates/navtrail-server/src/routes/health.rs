use axum::extract::State;
use serde::Serialize;

use navtrail_core::models::source::DataSource;

use crate::extract::Json;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    status: &'static str,
    version: &'static str,
    integrations: Integrations,
}

/// Whether each integration answers live or from mocks.
#[derive(Serialize)]
pub struct Integrations {
    ai: DataSource,
    weather: DataSource,
    currency: DataSource,
    places: DataSource,
    directions: DataSource,
}

fn source(live: bool) -> DataSource {
    if live { DataSource::Live } else { DataSource::Mock }
}

pub async fn health_check(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        integrations: Integrations {
            ai: source(state.ai.is_live()),
            weather: source(state.weather.is_live()),
            currency: source(state.currency.is_live()),
            places: source(state.places.is_live()),
            directions: source(state.directions.is_live()),
        },
    })
}

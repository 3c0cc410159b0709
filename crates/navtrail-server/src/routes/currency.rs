use axum::extract::State;
use serde::Deserialize;

use navtrail_core::models::currency::{CurrencyConversion, ExchangeRates};

use crate::error::ApiError;
use crate::extract::{Json, Query};
use crate::state::AppState;

fn default_base() -> String {
    "USD".to_string()
}

#[derive(Deserialize)]
pub struct RatesQuery {
    #[serde(default = "default_base")]
    base: String,
}

#[derive(Deserialize)]
pub struct ConvertQuery {
    from: String,
    to: String,
    amount: f64,
}

pub async fn rates(
    State(state): State<AppState>,
    Query(query): Query<RatesQuery>,
) -> Result<Json<ExchangeRates>, ApiError> {
    Ok(Json(state.currency.rates(&query.base).await?))
}

pub async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<CurrencyConversion>, ApiError> {
    Ok(Json(
        state
            .currency
            .convert(&query.from, &query.to, query.amount)
            .await?,
    ))
}

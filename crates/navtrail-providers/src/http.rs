use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ProviderError;

const MAX_ERROR_BODY: usize = 200;

/// Send `request` and decode a successful JSON body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request.send().await.map_err(|e| ProviderError::Request {
        service,
        message: e.to_string(),
    })?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| ProviderError::Request {
        service,
        message: e.to_string(),
    })?;
    debug!(service, status, bytes = body.len(), "provider response received");

    decode(service, status, &body)
}

pub(crate) fn decode<T: DeserializeOwned>(
    service: &'static str,
    status: u16,
    body: &str,
) -> Result<T, ProviderError> {
    if !(200..300).contains(&status) {
        return Err(ProviderError::Status {
            service,
            status,
            message: body.chars().take(MAX_ERROR_BODY).collect(),
        });
    }

    serde_json::from_str(body).map_err(|e| ProviderError::Decode {
        service,
        message: e.to_string(),
    })
}

/// Round to `places` decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

//! Routing through OpenRouteService.

use serde::Deserialize;
use tracing::debug;

use navtrail_core::geo::haversine_km;
use navtrail_core::keys;
use navtrail_core::models::directions::{Route, RouteMode};
use navtrail_core::models::location::Coordinates;
use navtrail_core::models::source::DataSource;

use crate::error::ProviderError;
use crate::http::{decode, fetch_json, round_to};

pub const BASE_URL: &str = "https://api.openrouteservice.org/v2/directions";
const SERVICE: &str = "openrouteservice";

pub struct DirectionsProvider {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl DirectionsProvider {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http,
            api_key: keys::configured(api_key),
        }
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
        mode: RouteMode,
    ) -> Result<Route, ProviderError> {
        check_coordinates(from)?;
        check_coordinates(to)?;

        let Some(key) = &self.api_key else {
            debug!(service = SERVICE, ?mode, "no API key configured, estimating route");
            return Ok(mock_route(from, to, mode));
        };

        // ORS takes lng,lat order.
        let request = self
            .http
            .get(format!("{BASE_URL}/{}", profile(mode)))
            .query(&[
                ("api_key", key.clone()),
                ("start", format!("{},{}", from.lng, from.lat)),
                ("end", format!("{},{}", to.lng, to.lat)),
            ]);
        let wire: WireDirections = fetch_json(SERVICE, request).await?;
        shape_route(wire, from, to, mode)
    }
}

fn profile(mode: RouteMode) -> &'static str {
    match mode {
        RouteMode::Driving => "driving-car",
        RouteMode::Walking => "foot-walking",
        RouteMode::Cycling => "cycling-regular",
    }
}

fn check_coordinates(c: Coordinates) -> Result<(), ProviderError> {
    if (-90.0..=90.0).contains(&c.lat) && (-180.0..=180.0).contains(&c.lng) {
        Ok(())
    } else {
        Err(ProviderError::InvalidInput(format!(
            "coordinates out of range: {}, {}",
            c.lat, c.lng
        )))
    }
}

#[derive(Deserialize)]
struct WireDirections {
    #[serde(default)]
    features: Vec<WireFeature>,
}

#[derive(Deserialize)]
struct WireFeature {
    properties: WireProperties,
}

#[derive(Deserialize)]
struct WireProperties {
    summary: WireSummary,
}

#[derive(Deserialize)]
struct WireSummary {
    /// Metres.
    #[serde(default)]
    distance: f64,
    /// Seconds.
    #[serde(default)]
    duration: f64,
}

/// Decode an OpenRouteService GeoJSON directions body.
pub fn parse_route(
    body: &str,
    from: Coordinates,
    to: Coordinates,
    mode: RouteMode,
) -> Result<Route, ProviderError> {
    decode(SERVICE, 200, body).and_then(|wire| shape_route(wire, from, to, mode))
}

fn shape_route(
    wire: WireDirections,
    from: Coordinates,
    to: Coordinates,
    mode: RouteMode,
) -> Result<Route, ProviderError> {
    let summary = wire
        .features
        .into_iter()
        .next()
        .map(|f| f.properties.summary)
        .ok_or_else(|| ProviderError::NotFound("route between the given points".to_string()))?;

    Ok(Route {
        source: DataSource::Live,
        mode,
        from,
        to,
        distance_km: round_to(summary.distance / 1000.0, 1),
        duration_minutes: (summary.duration / 60.0).round(),
    })
}

/// Straight-line distance at the mode's average speed.
pub fn mock_route(from: Coordinates, to: Coordinates, mode: RouteMode) -> Route {
    let distance_km = haversine_km(from, to);
    Route {
        source: DataSource::Mock,
        mode,
        from,
        to,
        distance_km: round_to(distance_km, 1),
        duration_minutes: (distance_km / mode.average_speed_kmh() * 60.0).round(),
    }
}

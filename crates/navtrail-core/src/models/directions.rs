use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::location::Coordinates;
use super::source::DataSource;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RouteMode {
    #[default]
    Driving,
    Walking,
    Cycling,
}

impl RouteMode {
    /// Average speed used for estimates, in km/h.
    pub fn average_speed_kmh(self) -> f64 {
        match self {
            RouteMode::Driving => 60.0,
            RouteMode::Walking => 5.0,
            RouteMode::Cycling => 15.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Route {
    pub source: DataSource,
    pub mode: RouteMode,
    pub from: Coordinates,
    pub to: Coordinates,
    pub distance_km: f64,
    pub duration_minutes: f64,
}

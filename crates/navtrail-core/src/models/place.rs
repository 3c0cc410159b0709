use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::location::Coordinates;
use super::source::DataSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub coordinates: Option<Coordinates>,
    pub place_id: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PlaceSearchResults {
    pub source: DataSource,
    pub query: String,
    pub results: Vec<Place>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeocodeResult {
    pub source: DataSource,
    pub address: String,
    pub coordinates: Coordinates,
    pub place_id: Option<String>,
}

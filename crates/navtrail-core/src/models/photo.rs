use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::location::{Location, LocationInput};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TravelPhoto {
    pub id: Uuid,
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub timestamp: Option<jiff::Timestamp>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewPhoto {
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub location: Option<LocationInput>,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub timestamp: Option<jiff::Timestamp>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItineraryRequest {
    pub destination: String,
    pub days: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub travel_style: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Itinerary {
    pub destination: String,
    pub days: Vec<ItineraryDay>,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub activities: Vec<ItineraryActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ItineraryActivity {
    pub time: String,
    pub activity: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Model-written commentary about a single travel log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TravelInsights {
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub travel_style: String,
    #[serde(default)]
    pub favorite_activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DestinationRecommendation {
    pub name: String,
    pub country: String,
    pub reason: String,
    #[serde(default)]
    pub best_time_to_visit: Option<String>,
}

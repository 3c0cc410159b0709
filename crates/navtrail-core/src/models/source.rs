use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a proxied payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DataSource {
    /// Fetched from the third-party API.
    Live,
    /// Substitute payload served because the API key is not configured.
    Mock,
}

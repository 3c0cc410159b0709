use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::source::DataSource;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExchangeRates {
    pub source: DataSource,
    pub base: String,
    /// Units of each currency per one unit of `base`.
    pub rates: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrencyConversion {
    pub source: DataSource,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub rate: f64,
    pub result: f64,
}

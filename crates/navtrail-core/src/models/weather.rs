use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::location::Coordinates;
use super::source::DataSource;

/// Weather recorded alongside a log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeatherSnapshot {
    /// Degrees Celsius.
    pub temperature: f64,
    pub condition: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub humidity: Option<u32>,
    /// Metres per second.
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurrentWeather {
    pub source: DataSource,
    pub location_name: String,
    pub coordinates: Option<Coordinates>,
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: String,
    pub description: String,
    pub icon: String,
    pub humidity: u32,
    pub wind_speed: f64,
}

impl CurrentWeather {
    /// Reduce a full report to the snapshot stored on an entry.
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.temperature,
            condition: self.condition.clone(),
            icon: Some(self.icon.clone()),
            humidity: Some(self.humidity),
            wind_speed: Some(self.wind_speed),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ForecastDay {
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeatherForecast {
    pub source: DataSource,
    pub location_name: String,
    pub days: Vec<ForecastDay>,
}

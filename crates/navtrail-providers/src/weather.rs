//! OpenWeatherMap current conditions and 5-day forecast.

use std::collections::BTreeMap;

use jiff::civil::Date;
use jiff::tz::TimeZone;
use serde::Deserialize;
use tracing::debug;

use navtrail_core::keys;
use navtrail_core::models::location::Coordinates;
use navtrail_core::models::source::DataSource;
use navtrail_core::models::weather::{CurrentWeather, ForecastDay, WeatherForecast};

use crate::error::ProviderError;
use crate::http::{decode, fetch_json, round_to};

pub const BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const SERVICE: &str = "openweathermap";
/// Forecast days returned after collapsing 3-hour slots.
pub const FORECAST_DAYS: usize = 5;

/// What to look up: a city name or a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    City(String),
    Coordinates(Coordinates),
}

impl WeatherQuery {
    /// Coordinates win when both halves are present; otherwise a non-blank
    /// city is required.
    pub fn from_parts(
        city: Option<&str>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Self, ProviderError> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                    return Err(ProviderError::InvalidInput(format!(
                        "coordinates out of range: {lat}, {lng}"
                    )));
                }
                Ok(Self::Coordinates(Coordinates { lat, lng }))
            }
            _ => match city.map(str::trim).filter(|c| !c.is_empty()) {
                Some(city) => Ok(Self::City(city.to_string())),
                None => Err(ProviderError::InvalidInput(
                    "either city or lat and lng are required".to_string(),
                )),
            },
        }
    }

    fn label(&self) -> String {
        match self {
            Self::City(city) => city.clone(),
            Self::Coordinates(c) => format!("{:.4}, {:.4}", c.lat, c.lng),
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::City(city) => vec![("q", city.clone())],
            Self::Coordinates(c) => vec![("lat", c.lat.to_string()), ("lon", c.lng.to_string())],
        }
    }
}

pub struct WeatherProvider {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl WeatherProvider {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http,
            api_key: keys::configured(api_key),
        }
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn current(&self, query: &WeatherQuery) -> Result<CurrentWeather, ProviderError> {
        let Some(key) = &self.api_key else {
            debug!(service = SERVICE, "no API key configured, serving mock weather");
            return Ok(mock_current(query));
        };

        let wire: WireCurrent = fetch_json(SERVICE, self.get("weather", query, key)).await?;
        Ok(shape_current(wire))
    }

    pub async fn forecast(&self, query: &WeatherQuery) -> Result<WeatherForecast, ProviderError> {
        let Some(key) = &self.api_key else {
            debug!(service = SERVICE, "no API key configured, serving mock forecast");
            return Ok(mock_forecast(query, jiff::Zoned::now().date()));
        };

        let wire: WireForecast = fetch_json(SERVICE, self.get("forecast", query, key)).await?;
        shape_forecast(wire)
    }

    fn get(&self, endpoint: &str, query: &WeatherQuery, key: &str) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{BASE_URL}/{endpoint}"))
            .query(&query.params())
            .query(&[("units", "metric"), ("appid", key)])
    }
}

#[derive(Deserialize)]
struct WireCurrent {
    name: String,
    #[serde(default)]
    coord: Option<WireCoord>,
    #[serde(default)]
    weather: Vec<WireCondition>,
    main: WireMain,
    #[serde(default)]
    wind: Option<WireWind>,
}

#[derive(Deserialize)]
struct WireCoord {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct WireCondition {
    main: String,
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct WireMain {
    temp: f64,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    temp_min: Option<f64>,
    #[serde(default)]
    temp_max: Option<f64>,
    #[serde(default)]
    humidity: u32,
}

#[derive(Deserialize)]
struct WireWind {
    speed: f64,
}

#[derive(Deserialize)]
struct WireForecast {
    city: WireCity,
    list: Vec<WireSlot>,
}

#[derive(Deserialize)]
struct WireCity {
    name: String,
}

#[derive(Deserialize)]
struct WireSlot {
    dt: i64,
    main: WireMain,
    #[serde(default)]
    weather: Vec<WireCondition>,
}

/// Decode an OpenWeatherMap `/weather` body.
pub fn parse_current(body: &str) -> Result<CurrentWeather, ProviderError> {
    decode(SERVICE, 200, body).map(shape_current)
}

/// Decode an OpenWeatherMap `/forecast` body and collapse it to daily
/// summaries.
pub fn parse_forecast(body: &str) -> Result<WeatherForecast, ProviderError> {
    decode(SERVICE, 200, body).and_then(shape_forecast)
}

fn shape_current(wire: WireCurrent) -> CurrentWeather {
    let (condition, description, icon) = match wire.weather.into_iter().next() {
        Some(w) => (w.main, w.description, w.icon),
        None => ("Unknown".to_string(), String::new(), String::new()),
    };

    CurrentWeather {
        source: DataSource::Live,
        location_name: wire.name,
        coordinates: wire.coord.map(|c| Coordinates {
            lat: c.lat,
            lng: c.lon,
        }),
        temperature: round_to(wire.main.temp, 1),
        feels_like: round_to(wire.main.feels_like.unwrap_or(wire.main.temp), 1),
        condition,
        description,
        icon,
        humidity: wire.main.humidity,
        wind_speed: wire.wind.map(|w| w.speed).unwrap_or_default(),
    }
}

/// Group 3-hour slots by UTC date. The min and max span all of a day's
/// slots; the condition is taken from the slot closest to midday.
fn shape_forecast(wire: WireForecast) -> Result<WeatherForecast, ProviderError> {
    struct Day {
        min: f64,
        max: f64,
        midday_distance: i8,
        condition: String,
        icon: String,
    }

    let mut days: BTreeMap<Date, Day> = BTreeMap::new();
    for slot in wire.list {
        let at = jiff::Timestamp::from_second(slot.dt)
            .map_err(|e| ProviderError::Decode {
                service: SERVICE,
                message: e.to_string(),
            })?
            .to_zoned(TimeZone::UTC);
        let distance = (at.hour() - 12).abs();
        let low = slot.main.temp_min.unwrap_or(slot.main.temp);
        let high = slot.main.temp_max.unwrap_or(slot.main.temp);
        let (condition, icon) = slot
            .weather
            .into_iter()
            .next()
            .map(|w| (w.main, w.icon))
            .unwrap_or_default();

        let day = days.entry(at.date()).or_insert_with(|| Day {
            min: low,
            max: high,
            midday_distance: i8::MAX,
            condition: String::new(),
            icon: String::new(),
        });
        day.min = day.min.min(low);
        day.max = day.max.max(high);
        if distance < day.midday_distance {
            day.midday_distance = distance;
            day.condition = condition;
            day.icon = icon;
        }
    }

    Ok(WeatherForecast {
        source: DataSource::Live,
        location_name: wire.city.name,
        days: days
            .into_iter()
            .take(FORECAST_DAYS)
            .map(|(date, day)| ForecastDay {
                date,
                temp_min: round_to(day.min, 1),
                temp_max: round_to(day.max, 1),
                condition: day.condition,
                icon: day.icon,
            })
            .collect(),
    })
}

pub fn mock_current(query: &WeatherQuery) -> CurrentWeather {
    CurrentWeather {
        source: DataSource::Mock,
        location_name: query.label(),
        coordinates: match query {
            WeatherQuery::Coordinates(c) => Some(*c),
            WeatherQuery::City(_) => None,
        },
        temperature: 22.0,
        feels_like: 21.0,
        condition: "Clear".to_string(),
        description: "clear sky".to_string(),
        icon: "01d".to_string(),
        humidity: 55,
        wind_speed: 3.5,
    }
}

/// Five days starting at `today`, cycling through a fixed pattern.
pub fn mock_forecast(query: &WeatherQuery, today: Date) -> WeatherForecast {
    const PATTERN: [(f64, f64, &str, &str); FORECAST_DAYS] = [
        (16.0, 24.0, "Clear", "01d"),
        (15.0, 22.0, "Clouds", "03d"),
        (14.0, 19.0, "Rain", "10d"),
        (13.0, 20.0, "Clouds", "02d"),
        (15.0, 23.0, "Clear", "01d"),
    ];

    let days = PATTERN
        .iter()
        .zip(today.series(jiff::Span::new().days(1)))
        .map(|((min, max, condition, icon), date)| ForecastDay {
            date,
            temp_min: *min,
            temp_max: *max,
            condition: condition.to_string(),
            icon: icon.to_string(),
        })
        .collect();

    WeatherForecast {
        source: DataSource::Mock,
        location_name: query.label(),
        days,
    }
}

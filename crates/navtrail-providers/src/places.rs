//! Google Places Text Search and Geocoding.

use serde::Deserialize;
use tracing::debug;

use navtrail_core::keys;
use navtrail_core::models::location::Coordinates;
use navtrail_core::models::place::{GeocodeResult, Place, PlaceSearchResults};
use navtrail_core::models::source::DataSource;

use crate::error::ProviderError;
use crate::http::{decode, fetch_json};

pub const BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const SERVICE: &str = "google-maps";
/// Bias radius around `near` for text search, in metres.
const SEARCH_RADIUS_M: u32 = 5_000;

/// (name, address, lat, lng, types)
const MOCK_PLACES: &[(&str, &str, f64, f64, &[&str])] = &[
    ("Eiffel Tower", "Champ de Mars, Paris, France", 48.8584, 2.2945, &["tourist_attraction"]),
    ("Louvre Museum", "Rue de Rivoli, Paris, France", 48.8606, 2.3376, &["museum"]),
    ("Colosseum", "Piazza del Colosseo, Rome, Italy", 41.8902, 12.4922, &["tourist_attraction"]),
    ("Sagrada Familia", "Carrer de Mallorca, Barcelona, Spain", 41.4036, 2.1744, &["church"]),
    ("Senso-ji", "Asakusa, Tokyo, Japan", 35.7148, 139.7967, &["place_of_worship"]),
    ("Fushimi Inari Taisha", "Fushimi Ward, Kyoto, Japan", 34.9671, 135.7727, &["place_of_worship"]),
    ("Statue of Liberty", "Liberty Island, New York, United States", 40.6892, -74.0445, &["tourist_attraction"]),
    ("Sydney Opera House", "Bennelong Point, Sydney, Australia", -33.8568, 151.2153, &["performing_arts_theater"]),
    ("Belem Tower", "Belem, Lisbon, Portugal", 38.6916, -9.2160, &["tourist_attraction"]),
    ("Big Ben", "Westminster, London, United Kingdom", 51.5007, -0.1246, &["tourist_attraction"]),
];

/// (city, country, lat, lng) used for offline geocoding.
const MOCK_CITIES: &[(&str, &str, f64, f64)] = &[
    ("Paris", "France", 48.8566, 2.3522),
    ("London", "United Kingdom", 51.5074, -0.1278),
    ("Rome", "Italy", 41.9028, 12.4964),
    ("Barcelona", "Spain", 41.3874, 2.1686),
    ("Lisbon", "Portugal", 38.7223, -9.1393),
    ("Tokyo", "Japan", 35.6762, 139.6503),
    ("Kyoto", "Japan", 35.0116, 135.7681),
    ("Osaka", "Japan", 34.6937, 135.5023),
    ("New York", "United States", 40.7128, -74.0060),
    ("Sydney", "Australia", -33.8688, 151.2093),
];

pub struct PlacesProvider {
    http: reqwest::Client,
    api_key: Option<String>,
}

impl PlacesProvider {
    pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
        Self {
            http,
            api_key: keys::configured(api_key),
        }
    }

    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    /// Free-text search, optionally biased towards `near`.
    pub async fn search(
        &self,
        query: &str,
        near: Option<Coordinates>,
    ) -> Result<PlaceSearchResults, ProviderError> {
        let query = required(query, "query")?;
        let Some(key) = &self.api_key else {
            debug!(service = SERVICE, query, "no API key configured, serving mock places");
            return Ok(mock_search(query));
        };

        let mut request = self
            .http
            .get(format!("{BASE_URL}/place/textsearch/json"))
            .query(&[("query", query), ("key", key.as_str())]);
        if let Some(c) = near {
            request = request.query(&[
                ("location", format!("{},{}", c.lat, c.lng)),
                ("radius", SEARCH_RADIUS_M.to_string()),
            ]);
        }

        let wire: WireResponse = fetch_json(SERVICE, request).await?;
        shape_search(query, wire)
    }

    pub async fn geocode(&self, address: &str) -> Result<GeocodeResult, ProviderError> {
        let address = required(address, "address")?;
        let Some(key) = &self.api_key else {
            debug!(service = SERVICE, address, "no API key configured, serving mock geocode");
            return mock_geocode(address);
        };

        let request = self
            .http
            .get(format!("{BASE_URL}/geocode/json"))
            .query(&[("address", address), ("key", key.as_str())]);
        let wire: WireResponse = fetch_json(SERVICE, request).await?;
        shape_geocode(address, wire)
    }
}

fn required<'a>(value: &'a str, name: &str) -> Result<&'a str, ProviderError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ProviderError::InvalidInput(format!("{name} is required")))
    } else {
        Ok(value)
    }
}

#[derive(Deserialize)]
struct WireResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<WireResult>,
}

#[derive(Deserialize)]
struct WireResult {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    formatted_address: String,
    geometry: WireGeometry,
    #[serde(default)]
    place_id: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Deserialize)]
struct WireGeometry {
    location: Coordinates,
}

impl WireResponse {
    /// Google reports failures in the body with HTTP 200.
    fn into_results(self) -> Result<Vec<WireResult>, ProviderError> {
        match self.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(self.results),
            _ => Err(ProviderError::Upstream {
                service: SERVICE,
                message: match self.error_message {
                    Some(detail) => format!("{}: {detail}", self.status),
                    None => self.status,
                },
            }),
        }
    }
}

/// Decode a Places Text Search body.
pub fn parse_search(query: &str, body: &str) -> Result<PlaceSearchResults, ProviderError> {
    decode(SERVICE, 200, body).and_then(|wire| shape_search(query, wire))
}

/// Decode a Geocoding body.
pub fn parse_geocode(address: &str, body: &str) -> Result<GeocodeResult, ProviderError> {
    decode(SERVICE, 200, body).and_then(|wire| shape_geocode(address, wire))
}

fn shape_search(query: &str, wire: WireResponse) -> Result<PlaceSearchResults, ProviderError> {
    let results = wire
        .into_results()?
        .into_iter()
        .map(|r| Place {
            name: r.name.unwrap_or_else(|| r.formatted_address.clone()),
            address: r.formatted_address,
            coordinates: Some(r.geometry.location),
            place_id: r.place_id,
            rating: r.rating,
            types: r.types,
        })
        .collect();

    Ok(PlaceSearchResults {
        source: DataSource::Live,
        query: query.to_string(),
        results,
    })
}

fn shape_geocode(address: &str, wire: WireResponse) -> Result<GeocodeResult, ProviderError> {
    let first = wire
        .into_results()?
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::NotFound(address.to_string()))?;

    Ok(GeocodeResult {
        source: DataSource::Live,
        address: first.formatted_address,
        coordinates: first.geometry.location,
        place_id: first.place_id,
    })
}

/// Catalogue places whose name or address contains any query word. With
/// no match, two generic places named after the query are returned.
pub fn mock_search(query: &str) -> PlaceSearchResults {
    let words: Vec<String> = query
        .split_whitespace()
        .filter(|w| w.len() > 2)
        .map(str::to_lowercase)
        .collect();

    let mut results: Vec<Place> = MOCK_PLACES
        .iter()
        .filter(|(name, address, ..)| {
            let haystack = format!("{name} {address}").to_lowercase();
            words.iter().any(|w| haystack.contains(w.as_str()))
        })
        .map(|(name, address, lat, lng, types)| Place {
            name: name.to_string(),
            address: address.to_string(),
            coordinates: Some(Coordinates { lat: *lat, lng: *lng }),
            place_id: None,
            rating: Some(4.6),
            types: types.iter().map(|t| t.to_string()).collect(),
        })
        .collect();

    if results.is_empty() {
        results = ["Old Town", "Central Market"]
            .iter()
            .map(|suffix| Place {
                name: format!("{query} {suffix}"),
                address: query.to_string(),
                coordinates: None,
                place_id: None,
                rating: None,
                types: vec!["point_of_interest".to_string()],
            })
            .collect();
    }

    PlaceSearchResults {
        source: DataSource::Mock,
        query: query.to_string(),
        results,
    }
}

/// Resolve against the built-in city list by name containment.
pub fn mock_geocode(address: &str) -> Result<GeocodeResult, ProviderError> {
    let needle = address.to_lowercase();
    MOCK_CITIES
        .iter()
        .find(|(city, ..)| needle.contains(&city.to_lowercase()))
        .map(|(city, country, lat, lng)| GeocodeResult {
            source: DataSource::Mock,
            address: format!("{city}, {country}"),
            coordinates: Coordinates { lat: *lat, lng: *lng },
            place_id: None,
        })
        .ok_or_else(|| ProviderError::NotFound(address.to_string()))
}

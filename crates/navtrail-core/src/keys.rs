//! API key conventions.
//!
//! Third-party integrations fall back to mock data unless their key is
//! configured. Deployment templates ship values such as
//! `your_api_key_placeholder`, which count as unset.

/// Marker that flags a templated, not-yet-filled-in key.
pub const PLACEHOLDER_MARKER: &str = "placeholder";

pub const OPENWEATHER_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const EXCHANGE_RATE_API_KEY: &str = "EXCHANGE_RATE_API_KEY";
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
pub const OPENROUTESERVICE_API_KEY: &str = "OPENROUTESERVICE_API_KEY";
pub const LLM_API_KEY: &str = "LLM_API_KEY";

/// Whether a key value is usable for a live call.
///
/// A key is configured iff it is present, not blank, and does not contain
/// [`PLACEHOLDER_MARKER`].
pub fn is_configured(value: Option<&str>) -> bool {
    match value {
        Some(v) => !v.trim().is_empty() && !v.contains(PLACEHOLDER_MARKER),
        None => false,
    }
}

/// Return the key only when [`is_configured`] holds.
pub fn configured(value: Option<String>) -> Option<String> {
    value.filter(|v| is_configured(Some(v)))
}

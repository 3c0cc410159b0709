use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A named place attached to a log, an entry or a photo.
///
/// `address` is a free-form, comma-separated string as returned by the
/// geocoder, e.g. `"Shibuya, Tokyo, Japan"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub place_id: Option<String>,
}

/// A location as submitted by a client. The id is optional; a new one is
/// assigned when the place is not already known to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LocationInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub place_id: Option<String>,
}

impl LocationInput {
    pub fn into_location(self) -> Location {
        Location {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            address: self.address,
            coordinates: self.coordinates,
            place_id: self.place_id,
        }
    }
}

impl Location {
    /// Whether `input` refers to this place: same id, same provider place
    /// id, or the same name and address.
    pub fn matches(&self, input: &LocationInput) -> bool {
        if let Some(id) = input.id {
            return id == self.id;
        }
        if let (Some(a), Some(b)) = (&self.place_id, &input.place_id) {
            return a == b;
        }
        self.name.eq_ignore_ascii_case(&input.name)
            && self.address.eq_ignore_ascii_case(&input.address)
    }
}

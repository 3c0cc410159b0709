//! Patch fields that tell an absent key apart from an explicit `null`.
//!
//! Used as `#[serde(default, deserialize_with = "nullable::deserialize")]`
//! on an `Option<Option<T>>`: a missing key stays `None`, `null` becomes
//! `Some(None)` (clear the field) and a value becomes `Some(Some(v))`.

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

//! navtrail-providers
//!
//! Thin clients for the third-party services the frontend needs: weather,
//! exchange rates, place search and routing. Each provider serves a
//! deterministic mock payload when its API key is not configured.

pub mod currency;
pub mod directions;
pub mod error;
mod http;
pub mod places;
pub mod weather;

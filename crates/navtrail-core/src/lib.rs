//! navtrail-core
//!
//! Pure domain types, travel statistics and API-key conventions.
//! No I/O: this is the shared vocabulary of the NavTrail system.

pub mod geo;
pub mod keys;
pub mod models;
pub mod stats;

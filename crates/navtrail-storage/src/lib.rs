//! navtrail-storage
//!
//! Process-lifetime travel log store. Nothing is persisted; restarting the
//! process drops every log.

pub mod error;
pub mod mutate;
pub mod seed;
pub mod store;

pub mod chat;
pub mod currency;
pub mod directions;
pub mod entry;
pub mod generated;
pub mod insights;
pub mod itinerary;
pub mod location;
pub mod nullable;
pub mod photo;
pub mod place;
pub mod source;
pub mod stats;
pub mod travel_log;
pub mod weather;

pub mod ai;
pub mod currency;
pub mod directions;
pub mod entries;
pub mod health;
pub mod logs;
pub mod photos;
pub mod places;
pub mod weather;

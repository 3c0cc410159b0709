//! navtrail-server
//!
//! HTTP API for the NavTrail frontend: travel log CRUD, AI assistance and
//! proxies to third-party travel services.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Assemble every route with CORS and request logging applied.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Travel logs
        .route(
            "/api/logs",
            get(routes::logs::list_logs).post(routes::logs::create_log),
        )
        .route("/api/logs/public", get(routes::logs::list_public_logs))
        .route("/api/logs/search", get(routes::logs::search_logs))
        .route(
            "/api/logs/{id}",
            get(routes::logs::get_log)
                .put(routes::logs::update_log)
                .delete(routes::logs::delete_log),
        )
        .route("/api/logs/{id}/stats", get(routes::logs::log_stats))
        .route("/api/logs/{id}/insights", get(routes::ai::log_insights))
        .route("/api/logs/{id}/entries", post(routes::entries::add_entry))
        .route(
            "/api/logs/{id}/entries/{entry_id}",
            put(routes::entries::update_entry).delete(routes::entries::delete_entry),
        )
        .route(
            "/api/logs/{id}/entries/{entry_id}/photos",
            post(routes::photos::add_photo),
        )
        .route(
            "/api/logs/{id}/entries/{entry_id}/photos/{photo_id}",
            axum::routing::delete(routes::photos::delete_photo),
        )
        // AI
        .route("/api/ai/chat", post(routes::ai::chat))
        .route("/api/ai/itinerary", post(routes::ai::itinerary))
        .route("/api/ai/recommendations", get(routes::ai::recommendations))
        // Third-party proxies
        .route("/api/weather", get(routes::weather::current_weather))
        .route("/api/weather/forecast", get(routes::weather::forecast))
        .route("/api/currency/rates", get(routes::currency::rates))
        .route("/api/currency/convert", get(routes::currency::convert))
        .route("/api/places/search", get(routes::places::search))
        .route("/api/places/geocode", get(routes::places::geocode))
        .route("/api/directions", get(routes::directions::route))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}

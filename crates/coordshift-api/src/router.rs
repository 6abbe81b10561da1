use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Conversion
        .route(
            "/api/v1/convert",
            get(handlers::convert_point).post(handlers::convert_batch),
        )
        .route("/api/v1/geojson/convert", post(handlers::convert_geojson))
        .route("/api/v1/bounds/check", get(handlers::check_bounds))

        // Reverse geocoding
        .route("/api/v1/regeo", get(handlers::reverse_geocode))

        .with_state(state)
}

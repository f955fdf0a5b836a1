//! Route definitions for the FauxSnow Forecast API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Resort browsing
        .nest("/resorts", resort_routes())
        // Forecast data and refresh
        .nest("/forecasts", forecast_routes())
        // Summary stats (the old about page)
        .route("/stats", get(handlers::get_stats))
}

/// Resort routes
fn resort_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_resorts))
        .route("/:resort_id", get(handlers::get_resort))
}

/// Forecast routes
fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_forecasts))
        .route("/refresh", post(handlers::refresh_forecasts))
        .route("/:resort_id", get(handlers::get_forecast))
}

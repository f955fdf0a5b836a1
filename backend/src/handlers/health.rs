//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub resort_data: String,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check that the static resorts file is readable
    let resort_data = match tokio::fs::metadata(&state.config.data.resorts_file).await {
        Ok(_) => "available".to_string(),
        Err(_) => "missing".to_string(),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        resort_data,
    })
}

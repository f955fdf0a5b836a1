//! HTTP handler for the summary stats endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppResult;
use crate::services::ResortService;
use crate::AppState;

/// Summary statistics across all resorts
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub resort_count: usize,
    pub total_acres: u32,
    pub total_trails: u32,
    pub total_lifts: u32,
}

/// Get summary statistics across the tracked resorts
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let resorts = ResortService::new(&state.config.data.resorts_file)
        .list()
        .await?;

    Ok(Json(StatsResponse {
        resort_count: resorts.len(),
        total_acres: resorts.iter().map(|r| r.stats.acres).sum(),
        total_trails: resorts.iter().map(|r| r.stats.trails).sum(),
        total_lifts: resorts.iter().map(|r| r.stats.lifts).sum(),
    }))
}

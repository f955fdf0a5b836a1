//! HTTP handlers for forecast endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use shared::models::Forecast;

use crate::error::{AppError, AppResult};
use crate::external::ForecastClient;
use crate::services::{ForecastService, ResortService};
use crate::AppState;

/// List the current annotated forecast snapshot
pub async fn list_forecasts(State(state): State<AppState>) -> AppResult<Json<Vec<Forecast>>> {
    let forecasts = ForecastService::new(&state.config.data.forecasts_file)
        .list()
        .await?;
    Ok(Json(forecasts))
}

/// Get the forecast for one resort
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(resort_id): Path<String>,
) -> AppResult<Json<Forecast>> {
    let forecast = ForecastService::new(&state.config.data.forecasts_file)
        .get(&resort_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Forecast for resort '{}'", resort_id)))?;
    Ok(Json(forecast))
}

/// Refresh outcome
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub updated: usize,
    pub message: String,
}

/// Fetch fresh forecasts from the weather API and replace the snapshot.
///
/// Degrades gracefully when the API returns nothing: the old snapshot is
/// kept and the response says so.
pub async fn refresh_forecasts(State(state): State<AppState>) -> AppResult<Json<RefreshResponse>> {
    let resorts = ResortService::new(&state.config.data.resorts_file)
        .list()
        .await?;

    let client = ForecastClient::new(&state.config.weather);
    let updated = ForecastService::new(&state.config.data.forecasts_file)
        .refresh_from_api(&client, &resorts)
        .await?;

    let message = if updated > 0 {
        format!("Updated forecasts for {} resorts", updated)
    } else {
        "Could not update forecasts".to_string()
    };

    Ok(Json(RefreshResponse { updated, message }))
}

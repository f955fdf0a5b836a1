//! HTTP handlers for resort endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use shared::assembly;
use shared::models::{Forecast, Resort};

use crate::error::{AppError, AppResult};
use crate::services::{ForecastService, ResortService};
use crate::AppState;

/// A resort paired with its current forecast, if one exists
#[derive(Debug, Serialize)]
pub struct ResortWithForecast {
    #[serde(flatten)]
    pub resort: Resort,
    pub forecast: Option<Forecast>,
}

/// List all resorts with their current forecasts
pub async fn list_resorts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResortWithForecast>>> {
    let resorts = ResortService::new(&state.config.data.resorts_file)
        .list()
        .await?;
    let forecasts = ForecastService::new(&state.config.data.forecasts_file)
        .list()
        .await?;

    let joined = assembly::join_resorts_and_forecasts(&resorts, &forecasts)
        .into_iter()
        .map(|(resort, forecast)| ResortWithForecast {
            resort: resort.clone(),
            forecast: forecast.cloned(),
        })
        .collect();

    Ok(Json(joined))
}

/// Get one resort with its current forecast
pub async fn get_resort(
    State(state): State<AppState>,
    Path(resort_id): Path<String>,
) -> AppResult<Json<ResortWithForecast>> {
    let resort = ResortService::new(&state.config.data.resorts_file)
        .get(&resort_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resort '{}'", resort_id)))?;

    let forecast = ForecastService::new(&state.config.data.forecasts_file)
        .get(&resort_id)
        .await?;

    Ok(Json(ResortWithForecast { resort, forecast }))
}

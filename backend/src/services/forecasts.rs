//! Forecast service over the flat snapshot file
//!
//! Reads the current forecast snapshot, replaces it wholesale on
//! refresh, and drives the fetch-annotate-save flow against the weather
//! API.

use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::Utc;
use shared::assembly;
use shared::models::{Forecast, Resort};

use crate::error::AppResult;
use crate::external::ForecastClient;

/// Service for reading and refreshing forecast snapshots
#[derive(Clone)]
pub struct ForecastService {
    forecasts_file: PathBuf,
}

impl ForecastService {
    /// Create a new ForecastService over the given snapshot file
    pub fn new(forecasts_file: impl Into<PathBuf>) -> Self {
        Self {
            forecasts_file: forecasts_file.into(),
        }
    }

    /// Load all forecasts from the snapshot.
    ///
    /// A missing file is the normal "no data yet" state of a seasonal
    /// app and yields an empty list; a corrupt file is an error.
    pub async fn list(&self) -> AppResult<Vec<Forecast>> {
        let bytes = match tokio::fs::read(&self.forecasts_file).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        let forecasts = serde_json::from_slice(&bytes)?;
        Ok(forecasts)
    }

    /// Look up the forecast for one resort; `None` when absent.
    pub async fn get(&self, resort_id: &str) -> AppResult<Option<Forecast>> {
        let forecasts = self.list().await?;
        Ok(assembly::find_forecast_by_resort_id(&forecasts, resort_id).cloned())
    }

    /// Persist forecasts, fully replacing any prior snapshot.
    pub async fn save(&self, forecasts: &[Forecast]) -> AppResult<()> {
        if let Some(parent) = self.forecasts_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(forecasts)?;
        tokio::fs::write(&self.forecasts_file, json).await?;
        Ok(())
    }

    /// Fetch fresh forecasts for every resort, annotate the periods with
    /// their conditions label, and replace the snapshot.
    ///
    /// Resorts the API has no data for are skipped with a warning.
    /// Returns the number of forecasts written; when the API yielded
    /// nothing at all, the existing snapshot is left untouched and 0 is
    /// returned.
    pub async fn refresh_from_api(
        &self,
        client: &ForecastClient,
        resorts: &[Resort],
    ) -> AppResult<usize> {
        let mut forecasts = Vec::new();

        for resort in resorts {
            match client
                .fetch_forecast(resort.location.lat, resort.location.lon)
                .await?
            {
                Some(raw_periods) => {
                    let periods = assembly::annotate(raw_periods);
                    tracing::debug!(
                        "Fetched {} forecast periods for {}",
                        periods.len(),
                        resort.resort_id
                    );
                    forecasts.push(Forecast {
                        resort_id: resort.resort_id.clone(),
                        generated_at: Utc::now(),
                        periods,
                    });
                }
                None => {
                    tracing::warn!("No forecast data for {}, skipping", resort.resort_id);
                }
            }
        }

        if forecasts.is_empty() {
            return Ok(0);
        }

        self.save(&forecasts).await?;
        Ok(forecasts.len())
    }
}

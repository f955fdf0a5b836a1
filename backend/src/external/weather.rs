//! Weather API client for fetching forecast data
//!
//! Integrates with the AerisWeather forecast endpoint via RapidAPI,
//! keyed by latitude/longitude.

use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use shared::assembly::RawPeriod;

use crate::config::WeatherConfig;
use crate::error::AppResult;

/// Period fields requested from the API, so the response stays small.
const RESPONSE_FIELDS: [&str; 7] = [
    "periods.maxTempF",
    "periods.minTempF",
    "periods.snowIN",
    "periods.minHumidity",
    "periods.weatherPrimary",
    "periods.validTime",
    "periods.weatherPrimaryCoded",
];

/// Weather API client
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

/// AerisWeather API response envelope
#[derive(Debug, Deserialize)]
struct AerisResponse {
    #[serde(default)]
    response: Vec<AerisForecast>,
}

#[derive(Debug, Deserialize)]
struct AerisForecast {
    periods: Vec<AerisPeriod>,
}

#[derive(Debug, Deserialize)]
struct AerisPeriod {
    #[serde(rename = "validTime")]
    valid_time: String,
    #[serde(rename = "minTempF")]
    min_temp_f: i32,
    #[serde(rename = "maxTempF")]
    max_temp_f: i32,
    #[serde(rename = "snowIN", default)]
    snow_in: f64,
    #[serde(rename = "minHumidity")]
    min_humidity: i32,
    #[serde(rename = "weatherPrimary")]
    weather_primary: String,
    #[serde(rename = "weatherPrimaryCoded")]
    weather_primary_coded: String,
}

impl ForecastClient {
    /// Create a new ForecastClient from the weather configuration
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_endpoint.clone(),
            api_host: config.api_host.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(config: &WeatherConfig, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_host: config.api_host.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the multi-day forecast for a coordinate pair.
    ///
    /// Returns `Ok(None)` when the endpoint is unreachable, rate limited,
    /// or returns no forecast for the location; "no data" is a normal
    /// state for the refresh flow, which skips the resort and moves on.
    pub async fn fetch_forecast(&self, lat: f64, lon: f64) -> AppResult<Option<Vec<RawPeriod>>> {
        let url = format!(
            "{}/{},{}?fields={}",
            self.base_url,
            lat,
            lon,
            RESPONSE_FIELDS.join(",")
        );

        let response = match self
            .client
            .get(&url)
            .header("x-rapidapi-host", &self.api_host)
            .header("x-rapidapi-key", &self.api_key)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!("Weather API request failed for {},{}: {}", lat, lon, err);
                return Ok(None);
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Weather API returned {} for {},{}",
                response.status(),
                lat,
                lon
            );
            return Ok(None);
        }

        let data: AerisResponse = match response.json().await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!("Failed to parse weather response for {},{}: {}", lat, lon, err);
                return Ok(None);
            }
        };

        Ok(data
            .response
            .into_iter()
            .next()
            .map(|forecast| convert_periods(forecast.periods)))
    }
}

/// Convert API periods to the normalized raw-period shape
fn convert_periods(periods: Vec<AerisPeriod>) -> Vec<RawPeriod> {
    periods
        .into_iter()
        .map(|p| RawPeriod {
            period_date: format_period_date(&p.valid_time),
            min_temp: p.min_temp_f,
            max_temp: p.max_temp_f,
            snow_in: p.snow_in,
            weather: p.weather_primary,
            weather_coded: p.weather_primary_coded,
            humidity: p.min_humidity,
        })
        .collect()
}

/// Render an ISO-8601 `validTime` as the short day label used for
/// display, e.g. `"2021-12-25T07:00:00-05:00"` -> `"Sat 25"`. Falls back
/// to the raw string when the timestamp does not parse.
fn format_period_date(valid_time: &str) -> String {
    match DateTime::parse_from_rfc3339(valid_time) {
        Ok(dt) => dt.format("%a %-d").to_string(),
        Err(_) => valid_time.to_string(),
    }
}

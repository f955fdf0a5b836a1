//! Weather forecast models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::Conditions;

/// One resort's multi-day outlook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    /// Identifier of the resort this forecast belongs to
    pub resort_id: String,
    /// When the forecast was retrieved from the weather API
    pub generated_at: DateTime<Utc>,
    /// Chronologically ordered forecast periods, day 1..N
    pub periods: Vec<ForecastPeriod>,
}

/// One day of forecast, annotated with the computed conditions label.
///
/// Field names on the wire match the historical snapshot files
/// (`minTemp`, `snowIN`, `weatherCoded`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPeriod {
    /// Short display label for the day, e.g. `"Sat 3"`
    #[serde(rename = "date")]
    pub period_date: String,
    /// Lowest temperature in the period (F)
    #[serde(rename = "minTemp")]
    pub min_temp: i32,
    /// Highest temperature in the period (F)
    #[serde(rename = "maxTemp")]
    pub max_temp: i32,
    /// Forecast snow accumulation in inches
    #[serde(rename = "snowIN")]
    pub snow_in: f64,
    /// Human-readable weather description
    pub weather: String,
    /// Coded weather string; the segment after the last colon is the
    /// short condition code, e.g. `"D::S"` -> `S`
    #[serde(rename = "weatherCoded")]
    pub weather_coded: String,
    /// Relative humidity in percent
    pub humidity: i32,
    /// Derived label, never an input
    pub conditions: Conditions,
}

//! Forecast assembly
//!
//! Joins resort metadata with forecast data and annotates raw forecast
//! periods with the computed conditions label. Every function here is a
//! stateless transform over its inputs.

use crate::conditions::classify;
use crate::models::{Forecast, ForecastPeriod, Resort};

/// A forecast period as it arrives from the weather API or a snapshot,
/// before the conditions label has been computed. Field names are
/// already normalized by the I/O layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPeriod {
    pub period_date: String,
    pub min_temp: i32,
    pub max_temp: i32,
    pub snow_in: f64,
    pub weather: String,
    pub weather_coded: String,
    pub humidity: i32,
}

/// Annotate raw periods with their conditions label.
///
/// Order-preserving and 1:1 — every input period produces exactly one
/// output period, and re-running on the same input yields the same
/// output.
pub fn annotate(periods: Vec<RawPeriod>) -> Vec<ForecastPeriod> {
    periods
        .into_iter()
        .map(|p| {
            let conditions = classify(&p.weather_coded, p.snow_in, p.min_temp, p.humidity);
            ForecastPeriod {
                period_date: p.period_date,
                min_temp: p.min_temp,
                max_temp: p.max_temp,
                snow_in: p.snow_in,
                weather: p.weather,
                weather_coded: p.weather_coded,
                humidity: p.humidity,
                conditions,
            }
        })
        .collect()
}

/// Pair each resort with its current forecast, if any.
///
/// Always returns exactly one pair per resort; a resort without a
/// matching forecast pairs with `None` rather than being dropped or
/// raising. When several forecasts share a resort id, the first in
/// forecast order wins.
pub fn join_resorts_and_forecasts<'a>(
    resorts: &'a [Resort],
    forecasts: &'a [Forecast],
) -> Vec<(&'a Resort, Option<&'a Forecast>)> {
    resorts
        .iter()
        .map(|resort| {
            (
                resort,
                find_forecast_by_resort_id(forecasts, &resort.resort_id),
            )
        })
        .collect()
}

/// First resort with the given id, if any.
pub fn find_by_resort_id<'a>(resorts: &'a [Resort], resort_id: &str) -> Option<&'a Resort> {
    resorts.iter().find(|r| r.resort_id == resort_id)
}

/// First forecast for the given resort id, if any.
pub fn find_forecast_by_resort_id<'a>(
    forecasts: &'a [Forecast],
    resort_id: &str,
) -> Option<&'a Forecast> {
    forecasts.iter().find(|f| f.resort_id == resort_id)
}

//! Flat-file storage tests
//!
//! Tests for the resort file reader and the forecast snapshot store:
//! - fixture files parse into typed models
//! - a missing snapshot is the normal empty state; a corrupt one errors
//! - saving fully replaces the previous snapshot

use chrono::Utc;
use fauxsnow_backend::error::AppError;
use fauxsnow_backend::services::{ForecastService, ResortService};
use shared::assembly::{annotate, RawPeriod};
use shared::conditions::Conditions;
use shared::models::Forecast;

const RESORTS_FIXTURE: &str = "tests/fixtures/ski_resorts.json";
const FORECASTS_FIXTURE: &str = "tests/fixtures/forecasts.json";

fn sample_forecast(resort_id: &str, min_temp: i32) -> Forecast {
    Forecast {
        resort_id: resort_id.to_string(),
        generated_at: Utc::now(),
        periods: annotate(vec![RawPeriod {
            period_date: "Sat 25".to_string(),
            min_temp,
            max_temp: min_temp + 10,
            snow_in: 0.0,
            weather: "Clear".to_string(),
            weather_coded: "N::CL".to_string(),
            humidity: 30,
        }]),
    }
}

#[tokio::test]
async fn resorts_fixture_parses_into_typed_records() {
    let service = ResortService::new(RESORTS_FIXTURE);
    let resorts = service.list().await.unwrap();

    assert_eq!(resorts.len(), 3);
    let snowshoe = &resorts[0];
    assert_eq!(snowshoe.resort_id, "snowshoe");
    assert_eq!(snowshoe.location.state, "West Virginia");
    assert_eq!(snowshoe.stats.trails, 57);
}

#[tokio::test]
async fn resort_lookup_by_id() {
    let service = ResortService::new(RESORTS_FIXTURE);

    let resort = service.get("timberline").await.unwrap();
    assert_eq!(resort.unwrap().location.state_short, "WV");

    assert!(service.get("no-such-resort").await.unwrap().is_none());
}

#[tokio::test]
async fn missing_resorts_file_is_an_error() {
    let service = ResortService::new("tests/fixtures/does_not_exist.json");
    assert!(matches!(
        service.list().await,
        Err(AppError::Storage(_))
    ));
}

#[tokio::test]
async fn forecasts_fixture_round_trips_conditions_labels() {
    let service = ForecastService::new(FORECASTS_FIXTURE);
    let forecasts = service.list().await.unwrap();

    assert_eq!(forecasts.len(), 2);
    let snowshoe = service.get("snowshoe").await.unwrap().unwrap();
    assert_eq!(snowshoe.periods.len(), 3);
    assert_eq!(snowshoe.periods[0].conditions, Conditions::Snow);
    assert_eq!(snowshoe.periods[1].conditions, Conditions::Faux);
    assert_eq!(snowshoe.periods[2].conditions, Conditions::None);
}

#[tokio::test]
async fn missing_snapshot_is_the_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    let service = ForecastService::new(dir.path().join("forecasts.json"));

    assert!(service.list().await.unwrap().is_empty());
    assert!(service.get("snowshoe").await.unwrap().is_none());
}

#[tokio::test]
async fn corrupt_snapshot_is_an_error_not_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forecasts.json");
    tokio::fs::write(&path, b"{ not json ]").await.unwrap();

    let service = ForecastService::new(&path);
    assert!(matches!(
        service.list().await,
        Err(AppError::Snapshot(_))
    ));
}

#[tokio::test]
async fn save_replaces_the_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let service = ForecastService::new(dir.path().join("forecasts.json"));

    service
        .save(&[
            sample_forecast("snowshoe", 18),
            sample_forecast("timberline", 24),
        ])
        .await
        .unwrap();
    assert_eq!(service.list().await.unwrap().len(), 2);

    // A second save is a full replacement, not a merge
    service.save(&[sample_forecast("wisp", 20)]).await.unwrap();

    let forecasts = service.list().await.unwrap();
    assert_eq!(forecasts.len(), 1);
    assert_eq!(forecasts[0].resort_id, "wisp");
    assert!(service.get("snowshoe").await.unwrap().is_none());
}

#[tokio::test]
async fn saved_forecasts_read_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let service = ForecastService::new(dir.path().join("forecasts.json"));

    let original = vec![sample_forecast("snowshoe", 18)];
    service.save(&original).await.unwrap();

    let read_back = service.list().await.unwrap();
    assert_eq!(read_back[0].resort_id, original[0].resort_id);
    assert_eq!(read_back[0].periods, original[0].periods);
}

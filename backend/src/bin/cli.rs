//! FauxSnow Forecast - command-line report tool
//!
//! Prints the faux-snow forecast summary and resort details as plain
//! text tables, and refreshes the forecast snapshot from the weather
//! API.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use fauxsnow_backend::config::Config;
use fauxsnow_backend::external::ForecastClient;
use fauxsnow_backend::services::{ForecastService, ResortService};
use shared::assembly;

#[derive(Parser)]
#[command(name = "fs-cli", version, about = "Faux Snow Forecast app")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Refresh the forecast data from the weather API
    Refresh,
    /// Display the forecast summary for all resorts
    Forecast,
    /// Display the details of one resort
    Detail {
        /// ID of the resort to display
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Refresh => refresh(&config).await,
        Command::Forecast => forecast(&config).await,
        Command::Detail { id } => detail(&config, &id).await,
    }
}

/// Fetch fresh forecasts for every resort and replace the snapshot
async fn refresh(config: &Config) -> Result<()> {
    let resorts = ResortService::new(&config.data.resorts_file).list().await?;
    let client = ForecastClient::new(&config.weather);
    let updated = ForecastService::new(&config.data.forecasts_file)
        .refresh_from_api(&client, &resorts)
        .await?;

    if updated > 0 {
        println!("Updated forecasts for {} resorts", updated);
    } else {
        println!("Could not update forecasts");
    }
    Ok(())
}

/// Print the summary table: one row per resort, one column per day
async fn forecast(config: &Config) -> Result<()> {
    let resorts = ResortService::new(&config.data.resorts_file).list().await?;
    let forecasts = ForecastService::new(&config.data.forecasts_file)
        .list()
        .await?;

    if forecasts.is_empty() {
        println!("No forecast data yet. Run `fs-cli refresh` first.");
        return Ok(());
    }

    // Day labels come from the first forecast in the snapshot
    let day_count = forecasts[0].periods.len();
    let mut headers = vec!["ID".to_string(), "Resort".to_string()];
    headers.extend(forecasts[0].periods.iter().map(|p| p.period_date.clone()));

    let rows: Vec<Vec<String>> = assembly::join_resorts_and_forecasts(&resorts, &forecasts)
        .into_iter()
        .map(|(resort, forecast)| {
            let mut row = vec![
                resort.resort_id.clone(),
                format!("({}) {}", resort.location.state_short, resort.name),
            ];
            if let Some(f) = forecast {
                row.extend(
                    f.periods
                        .iter()
                        .take(day_count)
                        .map(|p| p.conditions.label().to_string()),
                );
            }
            // Resorts with no (or a short) forecast get empty cells
            row.resize(headers.len(), String::new());
            row
        })
        .collect();

    println!("{}", render_table("Faux-Snow Forecast", &headers, &rows));
    Ok(())
}

/// Print the detail tables for one resort
async fn detail(config: &Config, resort_id: &str) -> Result<()> {
    let Some(resort) = ResortService::new(&config.data.resorts_file)
        .get(resort_id)
        .await?
    else {
        bail!("Unknown resort id '{}'", resort_id);
    };

    let resort_headers = vec![resort.name.clone(), resort.location.address.clone()];
    let resort_rows = vec![
        vec!["Links".to_string(), resort.links.conditions_url.clone()],
        vec![
            "Skiable Terrain".to_string(),
            format!("{} acres", resort.stats.acres),
        ],
        vec!["# Lifts".to_string(), resort.stats.lifts.to_string()],
        vec!["# Trails".to_string(), resort.stats.trails.to_string()],
        vec![
            "Vertical Drop".to_string(),
            format!("{} feet", resort.stats.vertical),
        ],
    ];
    println!(
        "{}",
        render_table("Ski Resort Details", &resort_headers, &resort_rows)
    );

    let forecast = ForecastService::new(&config.data.forecasts_file)
        .get(resort_id)
        .await?;
    let Some(forecast) = forecast else {
        println!("No forecast data for this resort yet.");
        return Ok(());
    };

    let headers = [
        "Date",
        "Conditions",
        "Weather",
        "Min Temp",
        "Max Temp",
        "Humidity",
        "Snow (IN)",
    ]
    .map(String::from)
    .to_vec();
    let rows: Vec<Vec<String>> = forecast
        .periods
        .iter()
        .map(|p| {
            vec![
                p.period_date.clone(),
                p.conditions.label().to_string(),
                p.weather.clone(),
                p.min_temp.to_string(),
                p.max_temp.to_string(),
                p.humidity.to_string(),
                p.snow_in.to_string(),
            ]
        })
        .collect();
    println!("{}", render_table("Forecast Details", &headers, &rows));
    Ok(())
}

/// Render a fixed-width text table with a title and header row
fn render_table(title: &str, headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let render_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell))
            .collect();
        format!("| {} |", padded.join(" | "))
    };

    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(headers));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}

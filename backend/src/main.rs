//! FauxSnow Forecast - API Server
//!
//! Serves resort metadata and annotated snow forecasts over a JSON API.

use std::{net::SocketAddr, sync::Arc};

use fauxsnow_backend::{config::Config, create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fs_server=debug,fauxsnow_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting FauxSnow Forecast Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Resorts file: {}", config.data.resorts_file);

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Crop Advisor - Backend Server
//!
//! Serves crop recommendations ranked by growing conditions and market
//! outlook for a requested location.

use std::net::SocketAddr;

use crop_advisor_backend::{config::Config, create_app, AppState};
use shared::Catalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "crop_advisor_server=debug,crop_advisor_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Crop Advisor Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key.is_none() {
        tracing::info!("Weather API key not configured, using simulated conditions");
    }
    if let Some(seed) = config.sampling.seed {
        tracing::warn!(seed, "Sampling seed set, every analysis returns identical readings");
    }

    // Load crop catalog
    let catalog = Catalog::standard();
    tracing::info!("Loaded {} crops into catalog", catalog.len());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config, catalog)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

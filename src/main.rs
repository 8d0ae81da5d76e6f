//! Occupancy Tracker - housekeeping room roster server

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use occupancy_tracker::{
    config::{AppConfig, LoggingConfig},
    create_router,
    repository::Repository,
    services::{clock::SystemClock, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Occupancy Tracker v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(rooms = config.roster.rooms.len(), strict_guests = config.roster.strict_guests, "Roster configured");

    let host: IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("Invalid host address {}", config.server.host))?;
    let addr = SocketAddr::new(host, config.server.port);

    let services = Services::new(
        Repository::new(),
        config.roster.clone(),
        config.share.clone(),
        Arc::new(SystemClock),
    );

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("occupancy_tracker={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

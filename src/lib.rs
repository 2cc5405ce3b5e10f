//! Vantage Gateway
//!
//! A REST façade over the Alpha Vantage market-data API: time series,
//! fundamentals, digital currencies, commodities, technical indicators and
//! economic indicators, normalized from the provider's inconsistently
//! shaped JSON into uniform typed records. Callers authenticate per
//! request with an `ALPHAVANTAGE_API_KEY` header, validated once against
//! the upstream and cached per credential.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod gate;
pub mod normalize;
pub mod pipeline;
pub mod server;
pub mod services;
pub mod state;
pub mod upstream;

use config::Config;
use server::ApiServer;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging, load configuration, and serve until shutdown
pub async fn run() -> anyhow::Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vantage_gateway=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vantage Gateway...");

    let config = Config::from_env()?;
    let state = Arc::new(AppState::new(config)?);

    let mut server = ApiServer::new(state);
    server.start().await?;

    Ok(())
}

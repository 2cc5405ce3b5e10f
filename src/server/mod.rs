//! HTTP server for the gateway REST API
//!
//! One GET route per upstream field group leaf, plus a health check. The
//! surface is deliberately thin: routing and layers here, behavior in the
//! services.

pub mod handlers;
pub mod types;

use crate::error::{AppError, Result};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// REST API server manager
pub struct ApiServer {
    state: Arc<AppState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            shutdown_tx: None,
        }
    }

    /// Build the router with all routes
    pub fn router(state: Arc<AppState>) -> Router {
        // allow all origins for local development
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // ================================================================
            // Health check
            // ================================================================
            .route("/health", get(handlers::health_check))
            .route("/", get(handlers::health_check))

            // ================================================================
            // Time series
            // ================================================================
            .route("/api/v1/timeseries/intraday", get(handlers::time_series_intraday))
            .route("/api/v1/timeseries/daily", get(handlers::time_series_daily))
            .route("/api/v1/timeseries/weekly", get(handlers::time_series_weekly))
            .route("/api/v1/timeseries/monthly", get(handlers::time_series_monthly))
            .route("/api/v1/timeseries/adjusted/daily", get(handlers::time_series_daily_adjusted))
            .route("/api/v1/timeseries/adjusted/weekly", get(handlers::time_series_weekly_adjusted))
            .route("/api/v1/timeseries/adjusted/monthly", get(handlers::time_series_monthly_adjusted))

            // ================================================================
            // Crypto
            // ================================================================
            .route("/api/v1/crypto/exchangerate", get(handlers::crypto_exchange_rate))
            .route("/api/v1/crypto/intraday", get(handlers::crypto_intraday))
            .route("/api/v1/crypto/daily", get(handlers::crypto_daily))
            .route("/api/v1/crypto/weekly", get(handlers::crypto_weekly))
            .route("/api/v1/crypto/monthly", get(handlers::crypto_monthly))

            // ================================================================
            // Fundamentals
            // ================================================================
            .route("/api/v1/fundamentals/overview", get(handlers::fundamentals_overview))
            .route("/api/v1/fundamentals/globalquote", get(handlers::fundamentals_global_quote))
            .route("/api/v1/fundamentals/income-statement/annual", get(handlers::income_statement_annual))
            .route("/api/v1/fundamentals/income-statement/quarterly", get(handlers::income_statement_quarterly))
            .route("/api/v1/fundamentals/balance-sheet/annual", get(handlers::balance_sheet_annual))
            .route("/api/v1/fundamentals/balance-sheet/quarterly", get(handlers::balance_sheet_quarterly))
            .route("/api/v1/fundamentals/cash-flow/annual", get(handlers::cash_flow_annual))
            .route("/api/v1/fundamentals/cash-flow/quarterly", get(handlers::cash_flow_quarterly))

            // ================================================================
            // Technical averages
            // ================================================================
            .route("/api/v1/indicators/sma", get(handlers::indicator_sma))
            .route("/api/v1/indicators/ema", get(handlers::indicator_ema))
            .route("/api/v1/indicators/wma", get(handlers::indicator_wma))
            .route("/api/v1/indicators/dema", get(handlers::indicator_dema))
            .route("/api/v1/indicators/tema", get(handlers::indicator_tema))

            // ================================================================
            // Economic indicators
            // ================================================================
            .route("/api/v1/economy/real-gdp", get(handlers::economy_real_gdp))
            .route("/api/v1/economy/real-gdp-per-capita", get(handlers::economy_real_gdp_per_capita))
            .route("/api/v1/economy/treasury-yield", get(handlers::economy_treasury_yield))
            .route("/api/v1/economy/federal-funds-rate", get(handlers::economy_federal_funds_rate))
            .route("/api/v1/economy/cpi", get(handlers::economy_cpi))
            .route("/api/v1/economy/inflation", get(handlers::economy_inflation))
            .route("/api/v1/economy/retail-sales", get(handlers::economy_retail_sales))
            .route("/api/v1/economy/durable-goods", get(handlers::economy_durable_goods))
            .route("/api/v1/economy/unemployment", get(handlers::economy_unemployment))
            .route("/api/v1/economy/non-farm-payroll", get(handlers::economy_non_farm_payroll))

            // ================================================================
            // Commodities
            // ================================================================
            .route("/api/v1/commodities/corn", get(handlers::commodity_corn))
            .route("/api/v1/commodities/wti", get(handlers::commodity_wti))
            .route("/api/v1/commodities/brent", get(handlers::commodity_brent))
            .route("/api/v1/commodities/natural-gas", get(handlers::commodity_natural_gas))
            .route("/api/v1/commodities/copper", get(handlers::commodity_copper))
            .route("/api/v1/commodities/aluminum", get(handlers::commodity_aluminum))
            .route("/api/v1/commodities/wheat", get(handlers::commodity_wheat))
            .route("/api/v1/commodities/cotton", get(handlers::commodity_cotton))
            .route("/api/v1/commodities/sugar", get(handlers::commodity_sugar))
            .route("/api/v1/commodities/coffee", get(handlers::commodity_coffee))
            .route("/api/v1/commodities/all", get(handlers::commodity_all))

            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the server and serve until shutdown
    pub async fn start(&mut self) -> Result<()> {
        let addr = self.state.config().bind_addr;
        let app = Self::router(self.state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Config(format!("failed to bind {}: {}", addr, e)))?;

        info!("API server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await?;

        Ok(())
    }

    /// Signal the server to stop
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            info!("API server shutdown requested");
        }
    }
}

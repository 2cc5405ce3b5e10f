//! Technical-averages service
//!
//! The provider computes the averages; the function name (SMA, EMA, WMA,
//! DEMA, TEMA) selects both the upstream endpoint and the field pulled
//! from each analysis bucket.

use crate::error::Result;
use crate::normalize::indicator::{technical_average, TechnicalIndicator};
use crate::pipeline::Call;
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use tracing::info;

/// Resolvers for the moving-average indicators
pub struct IndicatorService;

impl IndicatorService {
    pub async fn sma(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
        time_period: u32,
        series_type: &str,
    ) -> Result<TechnicalIndicator> {
        Self::average(state, credential, "SMA", symbol, interval, time_period, series_type).await
    }

    pub async fn ema(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
        time_period: u32,
        series_type: &str,
    ) -> Result<TechnicalIndicator> {
        Self::average(state, credential, "EMA", symbol, interval, time_period, series_type).await
    }

    pub async fn wma(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
        time_period: u32,
        series_type: &str,
    ) -> Result<TechnicalIndicator> {
        Self::average(state, credential, "WMA", symbol, interval, time_period, series_type).await
    }

    pub async fn dema(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
        time_period: u32,
        series_type: &str,
    ) -> Result<TechnicalIndicator> {
        Self::average(state, credential, "DEMA", symbol, interval, time_period, series_type).await
    }

    pub async fn tema(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
        time_period: u32,
        series_type: &str,
    ) -> Result<TechnicalIndicator> {
        Self::average(state, credential, "TEMA", symbol, interval, time_period, series_type).await
    }

    async fn average(
        state: &AppState,
        credential: Option<&str>,
        function: &'static str,
        symbol: &str,
        interval: &str,
        time_period: u32,
        series_type: &str,
    ) -> Result<TechnicalIndicator> {
        info!(
            "IndicatorService::{} - {} {} {}",
            function.to_lowercase(),
            symbol,
            interval,
            time_period
        );

        let descriptor = QueryDescriptor::new(function)
            .with("symbol", symbol)
            .with("interval", interval)
            .with("time_period", time_period.to_string())
            .with("series_type", series_type);
        let body = Call::new(state, credential).body(descriptor).await?;
        technical_average(&body, function)
    }
}

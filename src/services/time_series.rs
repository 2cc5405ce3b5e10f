//! Time-series service
//!
//! The provider names the series key after the function (and, for
//! intraday, the interval), so each operation resolves its key explicitly
//! instead of trusting the position of fields in the body.

use crate::error::Result;
use crate::normalize::time_series::{
    adjusted_time_series, time_series, AdjustedTimeSeries, TimeSeries,
};
use crate::pipeline::Call;
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use tracing::info;

/// Resolvers for the plain and adjusted time-series groups
pub struct TimeSeriesService;

impl TimeSeriesService {
    pub async fn intraday(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
        outputsize: &str,
    ) -> Result<TimeSeries> {
        info!("TimeSeriesService::intraday - {} {}", symbol, interval);

        let descriptor = QueryDescriptor::new("TIME_SERIES_INTRADAY")
            .with("symbol", symbol)
            .with("interval", interval)
            .with("outputsize", outputsize);
        let body = Call::new(state, credential).body(descriptor).await?;
        time_series(&body, &format!("Time Series ({})", interval))
    }

    pub async fn daily(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        outputsize: &str,
    ) -> Result<TimeSeries> {
        info!("TimeSeriesService::daily - {}", symbol);

        let descriptor = QueryDescriptor::new("TIME_SERIES_DAILY")
            .with("symbol", symbol)
            .with("outputsize", outputsize);
        let body = Call::new(state, credential).body(descriptor).await?;
        time_series(&body, "Time Series (Daily)")
    }

    pub async fn weekly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<TimeSeries> {
        info!("TimeSeriesService::weekly - {}", symbol);

        let descriptor = QueryDescriptor::new("TIME_SERIES_WEEKLY").with("symbol", symbol);
        let body = Call::new(state, credential).body(descriptor).await?;
        time_series(&body, "Weekly Time Series")
    }

    pub async fn monthly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<TimeSeries> {
        info!("TimeSeriesService::monthly - {}", symbol);

        let descriptor = QueryDescriptor::new("TIME_SERIES_MONTHLY").with("symbol", symbol);
        let body = Call::new(state, credential).body(descriptor).await?;
        time_series(&body, "Monthly Time Series")
    }

    pub async fn daily_adjusted(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        outputsize: &str,
    ) -> Result<AdjustedTimeSeries> {
        info!("TimeSeriesService::daily_adjusted - {}", symbol);

        let descriptor = QueryDescriptor::new("TIME_SERIES_DAILY_ADJUSTED")
            .with("symbol", symbol)
            .with("outputsize", outputsize);
        let body = Call::new(state, credential).body(descriptor).await?;
        adjusted_time_series(&body, "Time Series (Daily)")
    }

    pub async fn weekly_adjusted(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<AdjustedTimeSeries> {
        info!("TimeSeriesService::weekly_adjusted - {}", symbol);

        let descriptor = QueryDescriptor::new("TIME_SERIES_WEEKLY_ADJUSTED").with("symbol", symbol);
        let body = Call::new(state, credential).body(descriptor).await?;
        adjusted_time_series(&body, "Weekly Adjusted Time Series")
    }

    pub async fn monthly_adjusted(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<AdjustedTimeSeries> {
        info!("TimeSeriesService::monthly_adjusted - {}", symbol);

        let descriptor =
            QueryDescriptor::new("TIME_SERIES_MONTHLY_ADJUSTED").with("symbol", symbol);
        let body = Call::new(state, credential).body(descriptor).await?;
        adjusted_time_series(&body, "Monthly Adjusted Time Series")
    }
}

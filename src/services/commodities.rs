//! Commodities service

use crate::error::Result;
use crate::normalize::commodity::{commodity_series, CommoditySeries};
use crate::pipeline::Call;
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use tracing::info;

/// Resolvers for the commodity price-series group
pub struct CommoditiesService;

impl CommoditiesService {
    pub async fn corn(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "CORN", interval).await
    }

    pub async fn crude_oil_wti(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "WTI", interval).await
    }

    pub async fn crude_oil_brent(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "BRENT", interval).await
    }

    pub async fn natural_gas(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "NATURAL_GAS", interval).await
    }

    pub async fn copper(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "COPPER", interval).await
    }

    pub async fn aluminum(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "ALUMINUM", interval).await
    }

    pub async fn wheat(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "WHEAT", interval).await
    }

    pub async fn cotton(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "COTTON", interval).await
    }

    pub async fn sugar(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "SUGAR", interval).await
    }

    pub async fn coffee(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "COFFEE", interval).await
    }

    pub async fn all_commodities(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        Self::series(state, credential, "ALL_COMMODITIES", interval).await
    }

    async fn series(
        state: &AppState,
        credential: Option<&str>,
        function: &'static str,
        interval: &str,
    ) -> Result<CommoditySeries> {
        info!("CommoditiesService::series - {} {}", function, interval);

        let descriptor = QueryDescriptor::new(function).with("interval", interval);
        let body = Call::new(state, credential).body(descriptor).await?;
        commodity_series(&body)
    }
}

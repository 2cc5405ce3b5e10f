//! Economic-indicators service
//!
//! Every operation maps onto the flat name/interval/unit commodity shape.

use crate::error::Result;
use crate::normalize::commodity::{commodity_series, CommoditySeries};
use crate::pipeline::Call;
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use tracing::info;

/// Resolvers for the economic-indicator group
pub struct EconomyService;

impl EconomyService {
    pub async fn real_gdp(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        let descriptor = QueryDescriptor::new("REAL_GDP").with("interval", interval);
        Self::fetch(state, credential, descriptor).await
    }

    pub async fn real_gdp_per_capita(
        state: &AppState,
        credential: Option<&str>,
    ) -> Result<CommoditySeries> {
        Self::fetch(state, credential, QueryDescriptor::new("REAL_GDP_PER_CAPITA")).await
    }

    pub async fn treasury_yield(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
        maturity: &str,
    ) -> Result<CommoditySeries> {
        let descriptor = QueryDescriptor::new("TREASURY_YIELD")
            .with("interval", interval)
            .with("maturity", maturity);
        Self::fetch(state, credential, descriptor).await
    }

    pub async fn federal_funds_rate(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        let descriptor = QueryDescriptor::new("FEDERAL_FUNDS_RATE").with("interval", interval);
        Self::fetch(state, credential, descriptor).await
    }

    pub async fn cpi(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        let descriptor = QueryDescriptor::new("CPI").with("interval", interval);
        Self::fetch(state, credential, descriptor).await
    }

    pub async fn inflation(
        state: &AppState,
        credential: Option<&str>,
    ) -> Result<CommoditySeries> {
        Self::fetch(state, credential, QueryDescriptor::new("INFLATION")).await
    }

    pub async fn retail_sales(
        state: &AppState,
        credential: Option<&str>,
    ) -> Result<CommoditySeries> {
        Self::fetch(state, credential, QueryDescriptor::new("RETAIL_SALES")).await
    }

    pub async fn durable_goods(
        state: &AppState,
        credential: Option<&str>,
    ) -> Result<CommoditySeries> {
        Self::fetch(state, credential, QueryDescriptor::new("DURABLES")).await
    }

    pub async fn unemployment(
        state: &AppState,
        credential: Option<&str>,
    ) -> Result<CommoditySeries> {
        Self::fetch(state, credential, QueryDescriptor::new("UNEMPLOYMENT")).await
    }

    pub async fn non_farm_payroll(
        state: &AppState,
        credential: Option<&str>,
        interval: &str,
    ) -> Result<CommoditySeries> {
        let descriptor = QueryDescriptor::new("NONFARM_PAYROLL").with("interval", interval);
        Self::fetch(state, credential, descriptor).await
    }

    async fn fetch(
        state: &AppState,
        credential: Option<&str>,
        descriptor: QueryDescriptor,
    ) -> Result<CommoditySeries> {
        info!("EconomyService::fetch - {}", descriptor.function());

        let body = Call::new(state, credential).body(descriptor).await?;
        commodity_series(&body)
    }
}

//! Fundamentals service
//!
//! Statement payloads are arrays of flat report objects under
//! `annualReports` / `quarterlyReports`; overview and global quote are
//! single records. All of them go through the typed pipeline step, so a
//! report missing a required field is a schema violation rather than a
//! silently partial result.

use crate::catalog::{BalanceSheet, CashFlow, GlobalQuote, IncomeStatement, Overview};
use crate::error::Result;
use crate::extract::ExtractPath;
use crate::pipeline::Call;
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use tracing::info;

const ANNUAL_REPORTS: ExtractPath = ExtractPath::new(&["annualReports"]);
const QUARTERLY_REPORTS: ExtractPath = ExtractPath::new(&["quarterlyReports"]);
const GLOBAL_QUOTE_PATH: ExtractPath = ExtractPath::new(&["Global Quote"]);

/// Resolvers for the fundamentals group
pub struct FundamentalsService;

impl FundamentalsService {
    pub async fn overview(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Overview> {
        info!("FundamentalsService::overview - {}", symbol);

        let descriptor = QueryDescriptor::new("OVERVIEW").with("symbol", symbol);
        Call::new(state, credential)
            .typed(descriptor, ExtractPath::ROOT)
            .await
    }

    pub async fn global_quote(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<GlobalQuote> {
        info!("FundamentalsService::global_quote - {}", symbol);

        let descriptor = QueryDescriptor::new("GLOBAL_QUOTE").with("symbol", symbol);
        Call::new(state, credential)
            .typed(descriptor, GLOBAL_QUOTE_PATH)
            .await
    }

    pub async fn income_statement_annual(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Vec<IncomeStatement>> {
        info!("FundamentalsService::income_statement_annual - {}", symbol);
        Self::reports(state, credential, "INCOME_STATEMENT", symbol, ANNUAL_REPORTS).await
    }

    pub async fn income_statement_quarterly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Vec<IncomeStatement>> {
        info!(
            "FundamentalsService::income_statement_quarterly - {}",
            symbol
        );
        Self::reports(state, credential, "INCOME_STATEMENT", symbol, QUARTERLY_REPORTS).await
    }

    pub async fn balance_sheet_annual(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Vec<BalanceSheet>> {
        info!("FundamentalsService::balance_sheet_annual - {}", symbol);
        Self::reports(state, credential, "BALANCE_SHEET", symbol, ANNUAL_REPORTS).await
    }

    pub async fn balance_sheet_quarterly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Vec<BalanceSheet>> {
        info!("FundamentalsService::balance_sheet_quarterly - {}", symbol);
        Self::reports(state, credential, "BALANCE_SHEET", symbol, QUARTERLY_REPORTS).await
    }

    pub async fn cash_flow_annual(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Vec<CashFlow>> {
        info!("FundamentalsService::cash_flow_annual - {}", symbol);
        Self::reports(state, credential, "CASH_FLOW", symbol, ANNUAL_REPORTS).await
    }

    pub async fn cash_flow_quarterly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
    ) -> Result<Vec<CashFlow>> {
        info!("FundamentalsService::cash_flow_quarterly - {}", symbol);
        Self::reports(state, credential, "CASH_FLOW", symbol, QUARTERLY_REPORTS).await
    }

    async fn reports<T: serde::de::DeserializeOwned>(
        state: &AppState,
        credential: Option<&str>,
        function: &'static str,
        symbol: &str,
        path: ExtractPath,
    ) -> Result<Vec<T>> {
        let descriptor = QueryDescriptor::new(function).with("symbol", symbol);
        Call::new(state, credential).typed(descriptor, path).await
    }
}

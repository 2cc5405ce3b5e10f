//! REST endpoint handlers
//!
//! One handler per leaf field. Handlers only pull the credential header,
//! deserialize query parameters, and delegate to the matching service;
//! failures surface through [`crate::error::AppError`]'s response mapping.

use crate::catalog::{BalanceSheet, CashFlow, GlobalQuote, IncomeStatement, Overview};
use crate::error::Result;
use crate::normalize::commodity::CommoditySeries;
use crate::normalize::crypto::{CryptoIntraday, DigitalCurrencySeries};
use crate::normalize::indicator::TechnicalIndicator;
use crate::normalize::time_series::{AdjustedTimeSeries, TimeSeries};
use crate::server::types::*;
use crate::services::{
    CommoditiesService, CryptoService, EconomyService, FundamentalsService, IndicatorService,
    TimeSeriesService,
};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

/// Header carrying the caller's upstream credential
pub const CREDENTIAL_HEADER: &str = "ALPHAVANTAGE_API_KEY";

fn credential(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CREDENTIAL_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Health check endpoint - GET /health or GET /
pub async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok", "service": "vantage-gateway"}))
}

// ============================================================================
// Time series
// ============================================================================

pub async fn time_series_intraday(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IntradayQuery>,
) -> Result<Json<TimeSeries>> {
    let series = TimeSeriesService::intraday(
        &state,
        credential(&headers),
        &query.symbol,
        &query.interval,
        &query.outputsize,
    )
    .await?;
    Ok(Json(series))
}

pub async fn time_series_daily(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DailyQuery>,
) -> Result<Json<TimeSeries>> {
    let series =
        TimeSeriesService::daily(&state, credential(&headers), &query.symbol, &query.outputsize)
            .await?;
    Ok(Json(series))
}

pub async fn time_series_weekly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<TimeSeries>> {
    let series = TimeSeriesService::weekly(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(series))
}

pub async fn time_series_monthly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<TimeSeries>> {
    let series = TimeSeriesService::monthly(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(series))
}

pub async fn time_series_daily_adjusted(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<DailyQuery>,
) -> Result<Json<AdjustedTimeSeries>> {
    let series = TimeSeriesService::daily_adjusted(
        &state,
        credential(&headers),
        &query.symbol,
        &query.outputsize,
    )
    .await?;
    Ok(Json(series))
}

pub async fn time_series_weekly_adjusted(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<AdjustedTimeSeries>> {
    let series =
        TimeSeriesService::weekly_adjusted(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(series))
}

pub async fn time_series_monthly_adjusted(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<AdjustedTimeSeries>> {
    let series =
        TimeSeriesService::monthly_adjusted(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(series))
}

// ============================================================================
// Crypto
// ============================================================================

pub async fn crypto_exchange_rate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ExchangeRateQuery>,
) -> Result<Json<crate::catalog::ExchangeRate>> {
    let rate = CryptoService::exchange_rate(
        &state,
        credential(&headers),
        &query.from_currency,
        &query.to_currency,
    )
    .await?;
    Ok(Json(rate))
}

pub async fn crypto_intraday(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CryptoIntradayQuery>,
) -> Result<Json<CryptoIntraday>> {
    let series =
        CryptoService::intraday(&state, credential(&headers), &query.symbol, &query.interval)
            .await?;
    Ok(Json(series))
}

pub async fn crypto_daily(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CryptoSeriesQuery>,
) -> Result<Json<DigitalCurrencySeries>> {
    let series =
        CryptoService::daily(&state, credential(&headers), &query.symbol, &query.market).await?;
    Ok(Json(series))
}

pub async fn crypto_weekly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CryptoSeriesQuery>,
) -> Result<Json<DigitalCurrencySeries>> {
    let series =
        CryptoService::weekly(&state, credential(&headers), &query.symbol, &query.market).await?;
    Ok(Json(series))
}

pub async fn crypto_monthly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CryptoSeriesQuery>,
) -> Result<Json<DigitalCurrencySeries>> {
    let series =
        CryptoService::monthly(&state, credential(&headers), &query.symbol, &query.market).await?;
    Ok(Json(series))
}

// ============================================================================
// Fundamentals
// ============================================================================

pub async fn fundamentals_overview(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Overview>> {
    let overview =
        FundamentalsService::overview(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(overview))
}

pub async fn fundamentals_global_quote(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<GlobalQuote>> {
    let quote =
        FundamentalsService::global_quote(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(quote))
}

pub async fn income_statement_annual(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<IncomeStatement>>> {
    let reports =
        FundamentalsService::income_statement_annual(&state, credential(&headers), &query.symbol)
            .await?;
    Ok(Json(reports))
}

pub async fn income_statement_quarterly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<IncomeStatement>>> {
    let reports = FundamentalsService::income_statement_quarterly(
        &state,
        credential(&headers),
        &query.symbol,
    )
    .await?;
    Ok(Json(reports))
}

pub async fn balance_sheet_annual(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<BalanceSheet>>> {
    let reports =
        FundamentalsService::balance_sheet_annual(&state, credential(&headers), &query.symbol)
            .await?;
    Ok(Json(reports))
}

pub async fn balance_sheet_quarterly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<BalanceSheet>>> {
    let reports =
        FundamentalsService::balance_sheet_quarterly(&state, credential(&headers), &query.symbol)
            .await?;
    Ok(Json(reports))
}

pub async fn cash_flow_annual(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<CashFlow>>> {
    let reports =
        FundamentalsService::cash_flow_annual(&state, credential(&headers), &query.symbol).await?;
    Ok(Json(reports))
}

pub async fn cash_flow_quarterly(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SymbolQuery>,
) -> Result<Json<Vec<CashFlow>>> {
    let reports =
        FundamentalsService::cash_flow_quarterly(&state, credential(&headers), &query.symbol)
            .await?;
    Ok(Json(reports))
}

// ============================================================================
// Technical averages
// ============================================================================

pub async fn indicator_sma(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<TechnicalIndicator>> {
    let indicator = IndicatorService::sma(
        &state,
        credential(&headers),
        &query.symbol,
        &query.interval,
        query.time_period,
        &query.series_type,
    )
    .await?;
    Ok(Json(indicator))
}

pub async fn indicator_ema(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<TechnicalIndicator>> {
    let indicator = IndicatorService::ema(
        &state,
        credential(&headers),
        &query.symbol,
        &query.interval,
        query.time_period,
        &query.series_type,
    )
    .await?;
    Ok(Json(indicator))
}

pub async fn indicator_wma(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<TechnicalIndicator>> {
    let indicator = IndicatorService::wma(
        &state,
        credential(&headers),
        &query.symbol,
        &query.interval,
        query.time_period,
        &query.series_type,
    )
    .await?;
    Ok(Json(indicator))
}

pub async fn indicator_dema(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<TechnicalIndicator>> {
    let indicator = IndicatorService::dema(
        &state,
        credential(&headers),
        &query.symbol,
        &query.interval,
        query.time_period,
        &query.series_type,
    )
    .await?;
    Ok(Json(indicator))
}

pub async fn indicator_tema(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IndicatorQuery>,
) -> Result<Json<TechnicalIndicator>> {
    let indicator = IndicatorService::tema(
        &state,
        credential(&headers),
        &query.symbol,
        &query.interval,
        query.time_period,
        &query.series_type,
    )
    .await?;
    Ok(Json(indicator))
}

// ============================================================================
// Economic indicators
// ============================================================================

pub async fn economy_real_gdp(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<AnnualIntervalQuery>,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::real_gdp(&state, credential(&headers), &query.interval).await?;
    Ok(Json(series))
}

pub async fn economy_real_gdp_per_capita(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::real_gdp_per_capita(&state, credential(&headers)).await?;
    Ok(Json(series))
}

pub async fn economy_treasury_yield(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<TreasuryYieldQuery>,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::treasury_yield(
        &state,
        credential(&headers),
        &query.interval,
        &query.maturity,
    )
    .await?;
    Ok(Json(series))
}

pub async fn economy_federal_funds_rate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IntervalQuery>,
) -> Result<Json<CommoditySeries>> {
    let series =
        EconomyService::federal_funds_rate(&state, credential(&headers), &query.interval).await?;
    Ok(Json(series))
}

pub async fn economy_cpi(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IntervalQuery>,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::cpi(&state, credential(&headers), &query.interval).await?;
    Ok(Json(series))
}

pub async fn economy_inflation(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::inflation(&state, credential(&headers)).await?;
    Ok(Json(series))
}

pub async fn economy_retail_sales(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::retail_sales(&state, credential(&headers)).await?;
    Ok(Json(series))
}

pub async fn economy_durable_goods(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::durable_goods(&state, credential(&headers)).await?;
    Ok(Json(series))
}

pub async fn economy_unemployment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<CommoditySeries>> {
    let series = EconomyService::unemployment(&state, credential(&headers)).await?;
    Ok(Json(series))
}

pub async fn economy_non_farm_payroll(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<IntervalQuery>,
) -> Result<Json<CommoditySeries>> {
    let series =
        EconomyService::non_farm_payroll(&state, credential(&headers), &query.interval).await?;
    Ok(Json(series))
}

// ============================================================================
// Commodities
// ============================================================================

macro_rules! commodity_handler {
    ($name:ident, $service_fn:ident) => {
        pub async fn $name(
            State(state): State<Arc<AppState>>,
            headers: HeaderMap,
            Query(query): Query<IntervalQuery>,
        ) -> Result<Json<CommoditySeries>> {
            let series =
                CommoditiesService::$service_fn(&state, credential(&headers), &query.interval)
                    .await?;
            Ok(Json(series))
        }
    };
}

commodity_handler!(commodity_corn, corn);
commodity_handler!(commodity_wti, crude_oil_wti);
commodity_handler!(commodity_brent, crude_oil_brent);
commodity_handler!(commodity_natural_gas, natural_gas);
commodity_handler!(commodity_copper, copper);
commodity_handler!(commodity_aluminum, aluminum);
commodity_handler!(commodity_wheat, wheat);
commodity_handler!(commodity_cotton, cotton);
commodity_handler!(commodity_sugar, sugar);
commodity_handler!(commodity_coffee, coffee);
commodity_handler!(commodity_all, all_commodities);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_credential_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "alphavantage_api_key",
            HeaderValue::from_static("demo-key"),
        );
        assert_eq!(credential(&headers), Some("demo-key"));

        let empty = HeaderMap::new();
        assert_eq!(credential(&empty), None);
    }
}

//! Request parameter types for the REST surface
//!
//! Defaults mirror the original resolver signatures: `compact` output,
//! `15min` equity intraday, `5min` crypto intraday, `monthly` for
//! commodities and most economic indicators.

use serde::Deserialize;

fn default_outputsize() -> String {
    "compact".to_string()
}

fn default_equity_interval() -> String {
    "15min".to_string()
}

fn default_crypto_symbol() -> String {
    "BTC".to_string()
}

fn default_crypto_market() -> String {
    "CNY".to_string()
}

fn default_crypto_interval() -> String {
    "5min".to_string()
}

fn default_indicator_interval() -> String {
    "weekly".to_string()
}

fn default_time_period() -> u32 {
    60
}

fn default_series_type() -> String {
    "open".to_string()
}

fn default_monthly() -> String {
    "monthly".to_string()
}

fn default_annual() -> String {
    "annual".to_string()
}

fn default_maturity() -> String {
    "10year".to_string()
}

#[derive(Debug, Deserialize)]
pub struct IntradayQuery {
    pub symbol: String,
    #[serde(default = "default_equity_interval")]
    pub interval: String,
    #[serde(default = "default_outputsize")]
    pub outputsize: String,
}

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub symbol: String,
    #[serde(default = "default_outputsize")]
    pub outputsize: String,
}

#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeRateQuery {
    pub from_currency: String,
    pub to_currency: String,
}

#[derive(Debug, Deserialize)]
pub struct CryptoSeriesQuery {
    #[serde(default = "default_crypto_symbol")]
    pub symbol: String,
    #[serde(default = "default_crypto_market")]
    pub market: String,
}

#[derive(Debug, Deserialize)]
pub struct CryptoIntradayQuery {
    #[serde(default = "default_crypto_symbol")]
    pub symbol: String,
    #[serde(default = "default_crypto_interval")]
    pub interval: String,
}

#[derive(Debug, Deserialize)]
pub struct IndicatorQuery {
    pub symbol: String,
    #[serde(default = "default_indicator_interval")]
    pub interval: String,
    #[serde(default = "default_time_period")]
    pub time_period: u32,
    #[serde(default = "default_series_type")]
    pub series_type: String,
}

#[derive(Debug, Deserialize)]
pub struct IntervalQuery {
    #[serde(default = "default_monthly")]
    pub interval: String,
}

#[derive(Debug, Deserialize)]
pub struct AnnualIntervalQuery {
    #[serde(default = "default_annual")]
    pub interval: String,
}

#[derive(Debug, Deserialize)]
pub struct TreasuryYieldQuery {
    #[serde(default = "default_monthly")]
    pub interval: String,
    #[serde(default = "default_maturity")]
    pub maturity: String,
}

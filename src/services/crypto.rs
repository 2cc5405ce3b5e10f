//! Crypto service

use crate::catalog::ExchangeRate;
use crate::error::Result;
use crate::extract::ExtractPath;
use crate::normalize::crypto::{
    crypto_intraday, digital_currency, CryptoIntraday, DigitalCurrencySeries,
};
use crate::pipeline::Call;
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use tracing::info;

const EXCHANGE_RATE_PATH: ExtractPath = ExtractPath::new(&["Realtime Currency Exchange Rate"]);

/// Resolvers for the digital-currency group
pub struct CryptoService;

impl CryptoService {
    pub async fn exchange_rate(
        state: &AppState,
        credential: Option<&str>,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<ExchangeRate> {
        info!(
            "CryptoService::exchange_rate - {} -> {}",
            from_currency, to_currency
        );

        let descriptor = QueryDescriptor::new("CURRENCY_EXCHANGE_RATE")
            .with("from_currency", from_currency)
            .with("to_currency", to_currency);
        Call::new(state, credential)
            .typed(descriptor, EXCHANGE_RATE_PATH)
            .await
    }

    pub async fn daily(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        market: &str,
    ) -> Result<DigitalCurrencySeries> {
        Self::series(state, credential, "DIGITAL_CURRENCY_DAILY", symbol, market).await
    }

    pub async fn weekly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        market: &str,
    ) -> Result<DigitalCurrencySeries> {
        Self::series(state, credential, "DIGITAL_CURRENCY_WEEKLY", symbol, market).await
    }

    pub async fn monthly(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        market: &str,
    ) -> Result<DigitalCurrencySeries> {
        Self::series(state, credential, "DIGITAL_CURRENCY_MONTHLY", symbol, market).await
    }

    pub async fn intraday(
        state: &AppState,
        credential: Option<&str>,
        symbol: &str,
        interval: &str,
    ) -> Result<CryptoIntraday> {
        info!("CryptoService::intraday - {} {}", symbol, interval);

        // the upstream intraday feed is USD-only
        let descriptor = QueryDescriptor::new("CRYPTO_INTRADAY")
            .with("symbol", symbol)
            .with("market", "USD")
            .with("interval", interval);
        let body = Call::new(state, credential).body(descriptor).await?;
        crypto_intraday(&body, interval)
    }

    async fn series(
        state: &AppState,
        credential: Option<&str>,
        function: &'static str,
        symbol: &str,
        market: &str,
    ) -> Result<DigitalCurrencySeries> {
        info!("CryptoService::series - {} {} {}", function, symbol, market);

        let descriptor = QueryDescriptor::new(function)
            .with("symbol", symbol)
            .with("market", market);
        let body = Call::new(state, credential).body(descriptor).await?;
        digital_currency(&body, market)
    }
}

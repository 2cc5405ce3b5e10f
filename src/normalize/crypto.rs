//! Digital-currency normalizers
//!
//! The DIGITAL_CURRENCY_* payloads denominate every price twice, once in
//! the caller's market currency and once in USD, and embed the market code
//! in the row keys themselves ("1a. open (CNY)"). Lookup keys are therefore
//! built from the request's market parameter rather than hard-coded.

use super::{meta_field, metadata_object, price_field, row_object};
use crate::error::{AppError, Result};
use crate::normalize::time_series::{ohlcv_rows, OhlcvRow};
use serde::Serialize;
use serde_json::Value;

/// Metadata from a digital-currency `Meta Data` object
#[derive(Debug, Clone, Serialize)]
pub struct DigitalCurrencyMetadata {
    pub information: String,
    pub digital_currency_code: String,
    pub digital_currency_name: String,
    pub market_code: String,
    pub market_name: String,
    pub last_refreshed: String,
    pub time_zone: String,
}

fn digital_currency_metadata(body: &Value, time_zone_key: &str) -> Result<DigitalCurrencyMetadata> {
    let meta = metadata_object(body)?;
    Ok(DigitalCurrencyMetadata {
        information: meta_field(meta, "1. Information"),
        digital_currency_code: meta_field(meta, "2. Digital Currency Code"),
        digital_currency_name: meta_field(meta, "3. Digital Currency Name"),
        market_code: meta_field(meta, "4. Market Code"),
        market_name: meta_field(meta, "5. Market Name"),
        last_refreshed: meta_field(meta, "6. Last Refreshed"),
        time_zone: meta_field(meta, time_zone_key),
    })
}

/// One dual-denominated bucket
#[derive(Debug, Clone, Serialize)]
pub struct DigitalCurrencyRow {
    pub date: String,
    pub open_market: f64,
    pub open_usd: f64,
    pub high_market: f64,
    pub high_usd: f64,
    pub low_market: f64,
    pub low_usd: f64,
    pub close_market: f64,
    pub close_usd: f64,
    pub volume: f64,
    pub market_cap_usd: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DigitalCurrencySeries {
    pub metadata: DigitalCurrencyMetadata,
    pub series: Vec<DigitalCurrencyRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CryptoIntraday {
    pub metadata: DigitalCurrencyMetadata,
    pub series: Vec<OhlcvRow>,
}

// The monthly/weekly/daily functions share one normalizer; the payload
// names its series key after whichever cadence was requested.
const DIGITAL_SERIES_KEYS: [&str; 3] = [
    "Time Series (Digital Currency Monthly)",
    "Time Series (Digital Currency Weekly)",
    "Time Series (Digital Currency Daily)",
];

/// Normalize a DIGITAL_CURRENCY_{DAILY,WEEKLY,MONTHLY} payload
pub fn digital_currency(body: &Value, market: &str) -> Result<DigitalCurrencySeries> {
    let metadata = digital_currency_metadata(body, "7. Time Zone")?;

    let series = DIGITAL_SERIES_KEYS
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_object))
        .ok_or(AppError::MissingSeries)?;

    let market = market.to_uppercase();
    let open_key = format!("1a. open ({})", market);
    let high_key = format!("2a. high ({})", market);
    let low_key = format!("3a. low ({})", market);
    let close_key = format!("4a. close ({})", market);

    let mut rows = Vec::with_capacity(series.len());
    for (date, entry) in series {
        let row = row_object(entry, date)?;
        rows.push(DigitalCurrencyRow {
            date: date.clone(),
            open_market: price_field(row, &open_key, date)?,
            open_usd: price_field(row, "1b. open (USD)", date)?,
            high_market: price_field(row, &high_key, date)?,
            high_usd: price_field(row, "2b. high (USD)", date)?,
            low_market: price_field(row, &low_key, date)?,
            low_usd: price_field(row, "3b. low (USD)", date)?,
            close_market: price_field(row, &close_key, date)?,
            close_usd: price_field(row, "4b. close (USD)", date)?,
            volume: price_field(row, "5. volume", date)?,
            market_cap_usd: price_field(row, "6. market cap (USD)", date)?,
        });
    }

    Ok(DigitalCurrencySeries {
        metadata,
        series: rows,
    })
}

/// Normalize a CRYPTO_INTRADAY payload; the series key carries the
/// requested interval and the time zone is numbered `9.` in this shape.
pub fn crypto_intraday(body: &Value, interval: &str) -> Result<CryptoIntraday> {
    let metadata = digital_currency_metadata(body, "9. Time Zone")?;
    let series_key = format!("Time Series Crypto ({})", interval);
    let series = ohlcv_rows(body, &series_key)?;
    Ok(CryptoIntraday { metadata, series })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dual_row(market: &str) -> Value {
        let mut row = serde_json::Map::new();
        for (key, value) in [
            (format!("1a. open ({market})"), "7.0"),
            ("1b. open (USD)".to_string(), "1.0"),
            (format!("2a. high ({market})"), "7.7"),
            ("2b. high (USD)".to_string(), "1.1"),
            (format!("3a. low ({market})"), "6.3"),
            ("3b. low (USD)".to_string(), "0.9"),
            (format!("4a. close ({market})"), "7.35"),
            ("4b. close (USD)".to_string(), "1.05"),
            ("5. volume".to_string(), "1000"),
            ("6. market cap (USD)".to_string(), "1050.0"),
        ] {
            row.insert(key, Value::String(value.to_string()));
        }
        Value::Object(row)
    }

    fn daily_body(market: &str) -> Value {
        json!({
            "Meta Data": {
                "1. Information": "Daily Prices and Volumes for Digital Currency",
                "2. Digital Currency Code": "BTC",
                "3. Digital Currency Name": "Bitcoin",
                "4. Market Code": market,
                "5. Market Name": "Chinese Yuan",
                "6. Last Refreshed": "2024-01-02 00:00:00",
                "7. Time Zone": "UTC"
            },
            "Time Series (Digital Currency Daily)": {
                "2024-01-02": dual_row(market)
            }
        })
    }

    #[test]
    fn test_dual_denomination_row() {
        let result = digital_currency(&daily_body("CNY"), "CNY").unwrap();

        assert_eq!(result.metadata.digital_currency_code, "BTC");
        assert_eq!(result.series.len(), 1);

        let row = &result.series[0];
        assert_eq!(row.open_market, 7.0);
        assert_eq!(row.open_usd, 1.0);
        assert_eq!(row.close_market, 7.35);
        assert_eq!(row.market_cap_usd, 1050.0);
    }

    #[test]
    fn test_market_parameter_is_uppercased() {
        // row keys embed the upper-case market code
        let result = digital_currency(&daily_body("CNY"), "cny").unwrap();
        assert_eq!(result.series[0].high_market, 7.7);
    }

    #[test]
    fn test_wrong_market_parameter_fails_rather_than_emitting_empty_rows() {
        let err = digital_currency(&daily_body("CNY"), "EUR").unwrap_err();
        match err {
            AppError::MissingField { field, .. } => assert_eq!(field, "1a. open (EUR)"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_weekly_and_monthly_series_keys_are_probed() {
        let body = json!({
            "Meta Data": {},
            "Time Series (Digital Currency Weekly)": {
                "2024-01-05": dual_row("CNY")
            }
        });

        let result = digital_currency(&body, "CNY").unwrap();
        assert_eq!(result.series.len(), 1);
    }

    #[test]
    fn test_missing_series_fails() {
        let body = json!({"Meta Data": {}});
        assert!(matches!(
            digital_currency(&body, "CNY"),
            Err(AppError::MissingSeries)
        ));
    }

    #[test]
    fn test_intraday_series_key_from_interval() {
        let body = json!({
            "Meta Data": {
                "2. Digital Currency Code": "BTC",
                "6. Last Refreshed": "2024-01-02 12:05:00",
                "9. Time Zone": "UTC"
            },
            "Time Series Crypto (5min)": {
                "2024-01-02 12:00:00": {
                    "1. open": "42000.1",
                    "2. high": "42050.0",
                    "3. low": "41990.0",
                    "4. close": "42010.5",
                    "5. volume": "12.5"
                }
            }
        });

        let result = crypto_intraday(&body, "5min").unwrap();
        assert_eq!(result.metadata.time_zone, "UTC");
        assert_eq!(result.series.len(), 1);
        assert_eq!(result.series[0].close, 42010.5);

        // a different interval selects a key the payload does not have
        assert!(matches!(
            crypto_intraday(&body, "15min"),
            Err(AppError::MissingSeries)
        ));
    }
}

//! Plain and adjusted time-series normalizers

use super::{meta_field, metadata_object, price_field, row_object, series_object};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Series-level metadata from the `Meta Data` object
#[derive(Debug, Clone, Serialize)]
pub struct SeriesMetadata {
    pub information: String,
    pub symbol: String,
    pub last_refreshed: String,
    pub output_size: String,
    pub time_zone: String,
}

fn series_metadata(body: &Value) -> Result<SeriesMetadata> {
    let meta = metadata_object(body)?;
    Ok(SeriesMetadata {
        information: meta_field(meta, "1. Information"),
        symbol: meta_field(meta, "2. Symbol"),
        last_refreshed: meta_field(meta, "3. Last Refreshed"),
        output_size: meta_field(meta, "4. Output Size"),
        time_zone: meta_field(meta, "5. Time Zone"),
    })
}

/// One OHLCV bucket
#[derive(Debug, Clone, Serialize)]
pub struct OhlcvRow {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// One OHLCV bucket with adjusted close and dividend
#[derive(Debug, Clone, Serialize)]
pub struct AdjustedOhlcvRow {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adjusted_close: f64,
    pub volume: f64,
    pub dividend_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeries {
    pub metadata: SeriesMetadata,
    pub data: Vec<OhlcvRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdjustedTimeSeries {
    pub metadata: SeriesMetadata,
    pub data: Vec<AdjustedOhlcvRow>,
}

pub(crate) fn ohlcv_rows(body: &Value, series_key: &str) -> Result<Vec<OhlcvRow>> {
    let series = series_object(body, series_key)?;
    let mut data = Vec::with_capacity(series.len());
    for (date, entry) in series {
        let row = row_object(entry, date)?;
        data.push(OhlcvRow {
            date: date.clone(),
            open: price_field(row, "1. open", date)?,
            high: price_field(row, "2. high", date)?,
            low: price_field(row, "3. low", date)?,
            close: price_field(row, "4. close", date)?,
            volume: price_field(row, "5. volume", date)?,
        });
    }
    Ok(data)
}

/// Normalize a plain time-series payload whose buckets live under
/// `series_key` (the provider names this key per function and interval).
pub fn time_series(body: &Value, series_key: &str) -> Result<TimeSeries> {
    let metadata = series_metadata(body)?;
    let data = ohlcv_rows(body, series_key)?;
    Ok(TimeSeries { metadata, data })
}

/// Normalize an adjusted time-series payload (two extra upstream fields)
pub fn adjusted_time_series(body: &Value, series_key: &str) -> Result<AdjustedTimeSeries> {
    let metadata = series_metadata(body)?;
    let series = series_object(body, series_key)?;
    let mut data = Vec::with_capacity(series.len());
    for (date, entry) in series {
        let row = row_object(entry, date)?;
        data.push(AdjustedOhlcvRow {
            date: date.clone(),
            open: price_field(row, "1. open", date)?,
            high: price_field(row, "2. high", date)?,
            low: price_field(row, "3. low", date)?,
            close: price_field(row, "4. close", date)?,
            adjusted_close: price_field(row, "5. adjusted close", date)?,
            volume: price_field(row, "6. volume", date)?,
            dividend_amount: price_field(row, "7. dividend amount", date)?,
        });
    }
    Ok(AdjustedTimeSeries { metadata, data })
}

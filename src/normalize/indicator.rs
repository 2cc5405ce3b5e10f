//! Technical-indicator average normalizer
//!
//! The averages themselves are computed upstream; this only reshapes
//! `{date: {"EMA": "150.0000"}}` into (date, average) rows. The requested
//! function (SMA, EMA, WMA, DEMA, TEMA) doubles as both the series key
//! suffix and the per-bucket field name.

use super::{row_object, string_field};
use crate::catalog::IndicatorMetadata;
use crate::error::{AppError, Result};
use crate::extract::{walk_as, ExtractPath};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorPoint {
    pub date: String,
    pub average: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TechnicalIndicator {
    pub metadata: IndicatorMetadata,
    pub analysis: Vec<IndicatorPoint>,
}

pub fn technical_average(body: &Value, average_key: &str) -> Result<TechnicalIndicator> {
    if body.get("Meta Data").map_or(true, Value::is_null) {
        return Err(AppError::MissingMetadata);
    }
    let metadata: IndicatorMetadata = walk_as(body, ExtractPath::new(&["Meta Data"]))?;

    let series_key = format!("Technical Analysis: {}", average_key);
    let series = body
        .get(&series_key)
        .and_then(Value::as_object)
        .ok_or(AppError::MissingSeries)?;

    let mut analysis = Vec::with_capacity(series.len());
    for (date, entry) in series {
        let row = row_object(entry, date)?;
        analysis.push(IndicatorPoint {
            date: date.clone(),
            average: string_field(row, average_key, &format!("analysis entry '{}'", date))?,
        });
    }

    Ok(TechnicalIndicator { metadata, analysis })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ema_body() -> Value {
        json!({
            "Meta Data": {
                "1: Symbol": "AAPL",
                "2: Indicator": "Exponential Moving Average (EMA)",
                "3: Last Refreshed": "2024-01-02",
                "4: Interval": "weekly",
                "5: Time Period": 60,
                "6: Series Type": "open",
                "7: Time Zone": "US/Eastern"
            },
            "Technical Analysis: EMA": {
                "2024-01-02": {"EMA": "150.0000"},
                "2023-12-26": {"EMA": "149.2000"}
            }
        })
    }

    #[test]
    fn test_average_key_selects_field() {
        let result = technical_average(&ema_body(), "EMA").unwrap();
        assert_eq!(result.metadata.indicator, "Exponential Moving Average (EMA)");
        assert_eq!(result.analysis.len(), 2);
        assert_eq!(result.analysis[0].date, "2024-01-02");
        assert_eq!(result.analysis[0].average, "150.0000");
    }

    #[test]
    fn test_wrong_average_key_is_missing_series() {
        assert!(matches!(
            technical_average(&ema_body(), "SMA"),
            Err(AppError::MissingSeries)
        ));
    }

    #[test]
    fn test_missing_metadata_fails() {
        let body = json!({"Technical Analysis: EMA": {}});
        assert!(matches!(
            technical_average(&body, "EMA"),
            Err(AppError::MissingMetadata)
        ));
    }

    #[test]
    fn test_malformed_metadata_is_schema_error() {
        let body = json!({
            "Meta Data": {"1: Symbol": "AAPL"},
            "Technical Analysis: EMA": {}
        });
        assert!(matches!(
            technical_average(&body, "EMA"),
            Err(AppError::SchemaValidation(_))
        ));
    }
}

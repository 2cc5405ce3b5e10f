//! Commodity and economic-indicator normalizer
//!
//! The simplest upstream shape: a flat header (name/interval/unit) and a
//! `data` array of `{date, value}` objects. Values stay provider strings;
//! the feed uses "." for dates with no observation.

use super::{meta_field, string_field};
use crate::error::{AppError, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct CommodityPoint {
    pub date: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommoditySeries {
    pub name: String,
    pub interval: String,
    pub unit: String,
    pub data: Vec<CommodityPoint>,
}

pub fn commodity_series(body: &Value) -> Result<CommoditySeries> {
    let root = body.as_object().ok_or(AppError::MissingMetadata)?;

    let entries = body
        .get("data")
        .and_then(Value::as_array)
        .ok_or(AppError::MissingSeries)?;

    let mut data = Vec::with_capacity(entries.len());
    for entry in entries {
        let point = entry
            .as_object()
            .ok_or_else(|| AppError::SchemaValidation("data entry is not an object".into()))?;
        data.push(CommodityPoint {
            date: string_field(point, "date", "data entry")?,
            value: string_field(point, "value", "data entry")?,
        });
    }

    Ok(CommoditySeries {
        name: meta_field(root, "name"),
        interval: meta_field(root, "interval"),
        unit: meta_field(root, "unit"),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::FIELD_NOT_FOUND;
    use serde_json::json;

    #[test]
    fn test_commodity_series() {
        let body = json!({
            "name": "Crude Oil Prices WTI",
            "interval": "monthly",
            "unit": "dollars per barrel",
            "data": [
                {"date": "2024-01-01", "value": "74.15"},
                {"date": "2023-12-01", "value": "71.90"}
            ]
        });

        let result = commodity_series(&body).unwrap();
        assert_eq!(result.name, "Crude Oil Prices WTI");
        assert_eq!(result.unit, "dollars per barrel");
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.data[0].date, "2024-01-01");
        assert_eq!(result.data[0].value, "74.15");
    }

    #[test]
    fn test_no_observation_marker_is_passed_through() {
        let body = json!({
            "name": "Global Price Index of All Commodities",
            "interval": "monthly",
            "unit": "index",
            "data": [{"date": "2024-01-01", "value": "."}]
        });

        let result = commodity_series(&body).unwrap();
        assert_eq!(result.data[0].value, ".");
    }

    #[test]
    fn test_missing_data_array_fails() {
        let body = json!({"name": "CORN", "interval": "monthly", "unit": "usd"});
        assert!(matches!(
            commodity_series(&body),
            Err(AppError::MissingSeries)
        ));
    }

    #[test]
    fn test_missing_header_fields_use_sentinel() {
        let body = json!({"data": []});
        let result = commodity_series(&body).unwrap();
        assert_eq!(result.name, FIELD_NOT_FOUND);
        assert_eq!(result.interval, FIELD_NOT_FOUND);
        assert_eq!(result.unit, FIELD_NOT_FOUND);
    }

    #[test]
    fn test_entry_missing_value_fails() {
        let body = json!({
            "name": "CORN",
            "data": [{"date": "2024-01-01"}]
        });
        let err = commodity_series(&body).unwrap_err();
        assert!(matches!(err, AppError::MissingField { .. }));
    }
}

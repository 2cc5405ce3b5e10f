//! Shape normalizers for upstream payloads
//!
//! One normalizer per output shape. All follow the same two-phase pattern:
//! build the metadata record first (missing metadata *fields* degrade to a
//! sentinel, a missing metadata *object* is an error), then one typed row
//! per series entry, preserving the upstream mapping's iteration order.
//! Required numeric row fields fail fast when absent or unparseable.

pub mod commodity;
pub mod crypto;
pub mod indicator;
pub mod time_series;

use crate::error::{AppError, Result};
use serde_json::{Map, Value};

/// Sentinel for metadata fields the provider omitted
pub const FIELD_NOT_FOUND: &str = "field not found";

/// Metadata field lookup; missing keys degrade to the sentinel
pub(crate) fn meta_field(meta: &Map<String, Value>, key: &str) -> String {
    match meta.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(value) if !value.is_null() => value.to_string(),
        _ => FIELD_NOT_FOUND.to_string(),
    }
}

/// The `Meta Data` object every nested-series payload carries
pub(crate) fn metadata_object(body: &Value) -> Result<&Map<String, Value>> {
    body.get("Meta Data")
        .and_then(Value::as_object)
        .ok_or(AppError::MissingMetadata)
}

/// The series mapping under `key`
pub(crate) fn series_object<'a>(body: &'a Value, key: &str) -> Result<&'a Map<String, Value>> {
    body.get(key)
        .and_then(Value::as_object)
        .ok_or(AppError::MissingSeries)
}

/// One series bucket, which must itself be an object
pub(crate) fn row_object<'a>(entry: &'a Value, date: &str) -> Result<&'a Map<String, Value>> {
    entry.as_object().ok_or_else(|| {
        AppError::SchemaValidation(format!("series entry '{}' is not an object", date))
    })
}

/// Required numeric row field: string-valued upstream, parsed losslessly to
/// f64. Absent key fails as a missing field, an unparseable value as a
/// schema violation.
pub(crate) fn price_field(row: &Map<String, Value>, key: &str, date: &str) -> Result<f64> {
    match row.get(key) {
        None | Some(Value::Null) => Err(AppError::missing_field(key, format!("series entry '{}'", date))),
        Some(Value::String(raw)) => raw.parse::<f64>().map_err(|e| {
            AppError::SchemaValidation(format!("'{}' at '{}': {} ({:?})", key, date, e, raw))
        }),
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| {
            AppError::SchemaValidation(format!("'{}' at '{}': not representable as f64", key, date))
        }),
        Some(other) => Err(AppError::SchemaValidation(format!(
            "'{}' at '{}': expected a numeric string, got {}",
            key, date, other
        ))),
    }
}

/// Required string row field, forwarded as-is
pub(crate) fn string_field(row: &Map<String, Value>, key: &str, parent: &str) -> Result<String> {
    match row.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(value) if !value.is_null() => Ok(value.to_string()),
        _ => Err(AppError::missing_field(key, parent.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_meta_field_sentinel() {
        let meta = as_map(json!({"1. Information": "Daily Prices"}));
        assert_eq!(meta_field(&meta, "1. Information"), "Daily Prices");
        assert_eq!(meta_field(&meta, "2. Symbol"), FIELD_NOT_FOUND);
    }

    #[test]
    fn test_price_field_round_trips_decimal_values() {
        let row = as_map(json!({"1. open": "100.0"}));
        let parsed = price_field(&row, "1. open", "2024-01-02").unwrap();
        assert_eq!(parsed, 100.0);
        assert_eq!(parsed.to_string().parse::<f64>().unwrap(), parsed);
    }

    #[test]
    fn test_price_field_missing_key_fails() {
        let row = as_map(json!({"1. open": "100.0"}));
        let err = price_field(&row, "2. high", "2024-01-02").unwrap_err();
        assert!(matches!(err, AppError::MissingField { .. }));
    }

    #[test]
    fn test_price_field_unparseable_value_is_schema_error() {
        let row = as_map(json!({"1. open": "n/a"}));
        let err = price_field(&row, "1. open", "2024-01-02").unwrap_err();
        assert!(matches!(err, AppError::SchemaValidation(_)));
    }

    #[test]
    fn test_metadata_object_required() {
        let body = json!({"Time Series (Daily)": {}});
        assert!(matches!(
            metadata_object(&body),
            Err(AppError::MissingMetadata)
        ));
    }

    #[test]
    fn test_series_object_required() {
        let body = json!({"Meta Data": {}});
        assert!(matches!(
            series_object(&body, "Time Series (Daily)"),
            Err(AppError::MissingSeries)
        ));
    }
}

//! Generic response-path extraction
//!
//! Every endpoint shape locates its payload the same way: walk at most
//! three named keys down from the response root, failing loudly on the
//! first absent or null hop. This replaces per-endpoint field poking.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A fixed path of zero to three keys from the response root to the
/// payload of interest. An empty path addresses the whole body.
#[derive(Debug, Clone, Copy)]
pub struct ExtractPath {
    keys: &'static [&'static str],
}

impl ExtractPath {
    pub const ROOT: ExtractPath = ExtractPath { keys: &[] };

    pub const fn new(keys: &'static [&'static str]) -> Self {
        assert!(keys.len() <= 3);
        Self { keys }
    }

    pub fn keys(&self) -> &'static [&'static str] {
        self.keys
    }
}

/// Descend `path` from `body`, returning the addressed sub-object.
///
/// Each hop must resolve to a present, non-null value; the failure names
/// both the missing key and the hop it was expected under.
pub fn walk<'a>(body: &'a Value, path: ExtractPath) -> Result<&'a Value> {
    let mut current = body;
    let mut parent = String::from("response");

    for key in path.keys() {
        match current.get(key) {
            Some(value) if !value.is_null() => {
                current = value;
                parent = format!("'{}'", key);
            }
            _ => return Err(AppError::missing_field(*key, parent)),
        }
    }

    Ok(current)
}

/// `walk`, then parse the addressed sub-object into `T`. A shape mismatch
/// (missing required field, type coercion failure) is a schema violation,
/// not an upstream error.
pub fn walk_as<T: DeserializeOwned>(body: &Value, path: ExtractPath) -> Result<T> {
    let target = walk(body, path)?;
    serde_json::from_value(target.clone())
        .map_err(|e| AppError::SchemaValidation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_walk_empty_path_returns_body() {
        let body = json!({"a": 1});
        let result = walk(&body, ExtractPath::ROOT).unwrap();
        assert_eq!(*result, body);
    }

    #[test]
    fn test_walk_resolves_nested_keys() {
        let body = json!({
            "Global Quote": {"01. symbol": "IBM"},
        });
        let result = walk(&body, ExtractPath::new(&["Global Quote"])).unwrap();
        assert_eq!(result["01. symbol"], "IBM");

        let body = json!({"a": {"b": {"c": 42}}});
        let result = walk(&body, ExtractPath::new(&["a", "b", "c"])).unwrap();
        assert_eq!(*result, json!(42));
    }

    #[test]
    fn test_walk_missing_hop_names_the_key() {
        let body = json!({"Meta Data": {}});
        let err = walk(&body, ExtractPath::new(&["Time Series (Daily)"])).unwrap_err();
        match err {
            AppError::MissingField { field, parent } => {
                assert_eq!(field, "Time Series (Daily)");
                assert_eq!(parent, "response");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_walk_null_hop_fails() {
        let body = json!({"a": {"b": null}});
        let err = walk(&body, ExtractPath::new(&["a", "b"])).unwrap_err();
        match err {
            AppError::MissingField { field, parent } => {
                assert_eq!(field, "b");
                assert_eq!(parent, "'a'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[derive(Debug, Deserialize)]
    struct Quote {
        #[serde(rename(deserialize = "01. symbol"))]
        symbol: String,
    }

    #[test]
    fn test_walk_as_parses_target() {
        let body = json!({"Global Quote": {"01. symbol": "IBM"}});
        let quote: Quote = walk_as(&body, ExtractPath::new(&["Global Quote"])).unwrap();
        assert_eq!(quote.symbol, "IBM");
    }

    #[test]
    fn test_walk_as_shape_mismatch_is_schema_error() {
        let body = json!({"Global Quote": {"wrong": "IBM"}});
        let err = walk_as::<Quote>(&body, ExtractPath::new(&["Global Quote"])).unwrap_err();
        assert!(matches!(err, AppError::SchemaValidation(_)));
    }
}

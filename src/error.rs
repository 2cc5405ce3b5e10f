//! Application error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no ALPHAVANTAGE_API_KEY credential available")]
    MissingCredential,

    #[error("credential rejected by upstream validation")]
    InvalidCredential,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("missing field '{field}' in {parent}")]
    MissingField { field: String, parent: String },

    #[error("no metadata object in response")]
    MissingMetadata,

    #[error("no series object in response")]
    MissingSeries,

    #[error("schema validation error: {0}")]
    SchemaValidation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn missing_field(field: impl Into<String>, parent: impl Into<String>) -> Self {
        AppError::MissingField {
            field: field.into(),
            parent: parent.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredential => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredential => StatusCode::FORBIDDEN,
            AppError::Upstream(_)
            | AppError::MissingField { .. }
            | AppError::MissingMetadata
            | AppError::MissingSeries
            | AppError::SchemaValidation(_)
            | AppError::Http(_) => StatusCode::BAD_GATEWAY,
            AppError::Io(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Serializable error response for API callers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = match err {
            AppError::MissingCredential => "MISSING_CREDENTIAL",
            AppError::InvalidCredential => "INVALID_CREDENTIAL",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::MissingField { .. } => "MISSING_FIELD",
            AppError::MissingMetadata => "MISSING_METADATA",
            AppError::MissingSeries => "MISSING_SERIES",
            AppError::SchemaValidation(_) => "SCHEMA_VALIDATION_ERROR",
            AppError::Http(_) => "HTTP_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        };

        ErrorResponse {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

// Field-level errors surface as the envelope with a mapped status code;
// sibling routes are unaffected.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse::from(&self);
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::MissingCredential;
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.code, "MISSING_CREDENTIAL");

        let err = AppError::Upstream("Invalid API call".to_string());
        let resp = ErrorResponse::from(&err);
        assert_eq!(resp.code, "UPSTREAM_ERROR");
        assert!(resp.message.contains("Invalid API call"));
    }

    #[test]
    fn test_missing_field_names_hop() {
        let err = AppError::missing_field("Time Series (Daily)", "response");
        assert_eq!(
            err.to_string(),
            "missing field 'Time Series (Daily)' in response"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingCredential.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::InvalidCredential.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::Upstream("rate limit".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Config("bad url".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

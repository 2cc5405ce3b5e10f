//! Upstream Alpha Vantage client
//!
//! One synchronous-in-spirit GET per logical field: no retry, no caching,
//! a fixed timeout. The provider reports most failures in-band as an
//! `"Error Message"` field on an HTTP 200 body, so the client checks the
//! parsed JSON before handing it to extraction.

pub mod query;

use crate::error::{AppError, Result};
use async_trait::async_trait;
use query::QueryDescriptor;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Fixed timeout for upstream calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Seam over the upstream provider; mocked in tests
#[async_trait]
pub trait UpstreamApi: Send + Sync {
    /// Execute one authenticated GET for the descriptor and return the
    /// parsed JSON body. `api_key` is the caller's credential; `None` falls
    /// back to the process-level key if one is configured.
    async fn fetch(&self, descriptor: &QueryDescriptor, api_key: Option<&str>) -> Result<Value>;
}

/// reqwest-backed client for the provider's query endpoint
pub struct VantageClient {
    client: reqwest::Client,
    query_url: Url,
    fallback_api_key: Option<String>,
}

impl VantageClient {
    pub fn new(query_url: Url, fallback_api_key: Option<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            query_url,
            fallback_api_key,
        })
    }

    fn resolve_key<'a>(&'a self, api_key: Option<&'a str>) -> Result<&'a str> {
        api_key
            .or(self.fallback_api_key.as_deref())
            .ok_or(AppError::MissingCredential)
    }
}

#[async_trait]
impl UpstreamApi for VantageClient {
    async fn fetch(&self, descriptor: &QueryDescriptor, api_key: Option<&str>) -> Result<Value> {
        let key = self.resolve_key(api_key)?;

        let mut url = self.query_url.clone();
        url.set_query(Some(&descriptor.to_query_string(key)));

        tracing::debug!("GET {} function={}", self.query_url, descriptor.function());

        let body: Value = self.client.get(url).send().await?.json().await?;
        check_error_message(&body)?;
        Ok(body)
    }
}

/// Fail with the provider's message, verbatim, when the body carries a
/// non-null `"Error Message"` field.
pub fn check_error_message(body: &Value) -> Result<()> {
    match body.get("Error Message") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(message)) => Err(AppError::Upstream(message.clone())),
        Some(other) => Err(AppError::Upstream(other.to_string())),
    }
}

//! Environment configuration
//!
//! The gateway is stateless; everything it needs at startup comes from the
//! process environment (a `.env` file is honored for local development).

use crate::error::{AppError, Result};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Upstream query endpoint used when AV_URL is not set
pub const DEFAULT_QUERY_URL: &str = "https://www.alphavantage.co/query";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8686;
const DEFAULT_CREDENTIAL_TTL_SECS: u64 = 86_400;

/// Startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream query endpoint (`AV_URL`)
    pub query_url: Url,

    /// Fallback API key used when a request carries no credential (`AV_KEY`)
    pub fallback_api_key: Option<String>,

    /// Address the REST surface binds to (`GATEWAY_HOST` / `GATEWAY_PORT`)
    pub bind_addr: SocketAddr,

    /// Freshness window for cached credential validations (`AV_KEY_TTL_SECS`)
    pub credential_ttl: Duration,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let raw_url =
            std::env::var("AV_URL").unwrap_or_else(|_| DEFAULT_QUERY_URL.to_string());
        let query_url = Url::parse(&raw_url)
            .map_err(|e| AppError::Config(format!("invalid AV_URL '{}': {}", raw_url, e)))?;

        let fallback_api_key = std::env::var("AV_KEY").ok().filter(|k| !k.is_empty());

        let host = std::env::var("GATEWAY_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match std::env::var("GATEWAY_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("invalid GATEWAY_PORT '{}': {}", raw, e)))?,
            Err(_) => DEFAULT_PORT,
        };
        let bind_addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address: {}", e)))?;

        let ttl_secs = match std::env::var("AV_KEY_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("invalid AV_KEY_TTL_SECS '{}': {}", raw, e))
            })?,
            Err(_) => DEFAULT_CREDENTIAL_TTL_SECS,
        };

        Ok(Self {
            query_url,
            fallback_api_key,
            bind_addr,
            credential_ttl: Duration::from_secs(ttl_secs),
        })
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self {
            query_url: Url::parse("https://upstream.invalid/query").unwrap(),
            fallback_api_key: None,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            credential_ttl: Duration::from_secs(3600),
        }
    }
}

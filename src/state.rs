//! Application state management

use crate::config::Config;
use crate::error::Result;
use crate::gate::AccessGate;
use crate::upstream::{UpstreamApi, VantageClient};
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    config: Config,
    upstream: Arc<dyn UpstreamApi>,
    gate: AccessGate,
}

impl AppState {
    /// Create new application state with the real upstream client
    pub fn new(config: Config) -> Result<Self> {
        let upstream: Arc<dyn UpstreamApi> = Arc::new(VantageClient::new(
            config.query_url.clone(),
            config.fallback_api_key.clone(),
        )?);

        tracing::info!("Upstream endpoint: {}", config.query_url);

        Ok(Self::with_upstream(config, upstream))
    }

    /// Create state around an externally supplied upstream implementation
    pub fn with_upstream(config: Config, upstream: Arc<dyn UpstreamApi>) -> Self {
        let gate = AccessGate::new(upstream.clone(), config.credential_ttl);
        Self {
            config,
            upstream,
            gate,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn upstream(&self) -> &dyn UpstreamApi {
        self.upstream.as_ref()
    }

    pub fn gate(&self) -> &AccessGate {
        &self.gate
    }
}

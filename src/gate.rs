//! Request credential gate
//!
//! Every data-fetching route runs through [`AccessGate::permit`] before any
//! upstream call is made. A request without the credential header is denied
//! immediately, with no network traffic. Unknown (or stale) credentials are
//! validated once against the upstream with a canned probe query; the
//! outcome is cached per credential with an explicit freshness window, so
//! one caller's key never authorizes another's. Only successful probes are
//! recorded; a failing probe denies the current request and leaves no
//! state behind.

use crate::error::{AppError, Result};
use crate::upstream::query::QueryDescriptor;
use crate::upstream::UpstreamApi;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
struct CredentialEntry {
    validated_at: DateTime<Utc>,
}

pub struct AccessGate {
    upstream: Arc<dyn UpstreamApi>,
    validated: DashMap<String, CredentialEntry>,
    ttl: chrono::Duration,
}

impl AccessGate {
    pub fn new(upstream: Arc<dyn UpstreamApi>, ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            upstream,
            validated: DashMap::new(),
            ttl,
        }
    }

    /// Permission check for one inbound request. Returns the credential to
    /// use for the upstream call, or a denial.
    pub async fn permit(&self, credential: Option<&str>) -> Result<String> {
        let key = credential.ok_or(AppError::MissingCredential)?;

        if let Some(entry) = self.validated.get(key) {
            if Utc::now().signed_duration_since(entry.validated_at) < self.ttl {
                return Ok(key.to_string());
            }
        }

        // unknown or stale: one validation probe
        if self.probe(key).await? {
            self.validated.insert(
                key.to_string(),
                CredentialEntry {
                    validated_at: Utc::now(),
                },
            );
            tracing::info!("credential validated against upstream");
            Ok(key.to_string())
        } else {
            self.validated.remove(key);
            tracing::warn!("credential rejected by upstream probe");
            Err(AppError::InvalidCredential)
        }
    }

    /// Canned query against a known-stable endpoint. An in-band provider
    /// error (invalid key, rate limit) degrades to a denial; transport
    /// failures propagate, since they say nothing about the credential.
    async fn probe(&self, key: &str) -> Result<bool> {
        let descriptor = QueryDescriptor::new("GLOBAL_QUOTE").with("symbol", "IBM");

        let body = match self.upstream.fetch(&descriptor, Some(key)).await {
            Ok(body) => body,
            Err(AppError::Upstream(message)) => {
                tracing::warn!("validation probe rejected: {}", message);
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        Ok(body
            .get("Global Quote")
            .map_or(false, |quote| !quote.is_null()))
    }

    #[cfg(test)]
    fn backdate(&self, key: &str, age: chrono::Duration) {
        self.validated.insert(
            key.to_string(),
            CredentialEntry {
                validated_at: Utc::now() - age,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::mock::MockUpstream;
    use serde_json::{json, Value};

    fn probe_ok_body() -> Value {
        json!({"Global Quote": {"01. symbol": "IBM", "05. price": "183.86"}})
    }

    fn gate(upstream: Arc<MockUpstream>) -> AccessGate {
        AccessGate::new(upstream, Duration::from_secs(3600))
    }

    #[tokio::test]
    async fn test_absent_header_denies_without_network() {
        let upstream = MockUpstream::new(probe_ok_body());
        let gate = gate(upstream.clone());

        let err = gate.permit(None).await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
        assert_eq!(upstream.call_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_probe_is_cached_per_credential() {
        let upstream = MockUpstream::new(probe_ok_body());
        let gate = gate(upstream.clone());

        assert_eq!(gate.permit(Some("key-a")).await.unwrap(), "key-a");
        assert_eq!(upstream.call_count(), 1);

        // same credential: served from cache
        gate.permit(Some("key-a")).await.unwrap();
        assert_eq!(upstream.call_count(), 1);

        // a different credential gets its own probe
        gate.permit(Some("key-b")).await.unwrap();
        assert_eq!(upstream.call_count(), 2);
    }

    #[tokio::test]
    async fn test_stale_entry_triggers_fresh_probe() {
        let upstream = MockUpstream::new(probe_ok_body());
        let gate = gate(upstream.clone());

        gate.backdate("key-a", chrono::Duration::seconds(7200));
        gate.permit(Some("key-a")).await.unwrap();
        assert_eq!(upstream.call_count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_probe_denies_and_caches_nothing() {
        let upstream = MockUpstream::new(json!({"Error Message": "the apikey is invalid"}));
        let gate = gate(upstream.clone());

        let err = gate.permit(Some("bad-key")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));

        // no negative caching: the next attempt probes again
        let err = gate.permit(Some("bad-key")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
        assert_eq!(upstream.call_count(), 2);
    }

    #[tokio::test]
    async fn test_probe_without_quote_payload_denies() {
        let upstream = MockUpstream::new(json!({"Information": "rate limit reached"}));
        let gate = gate(upstream.clone());

        let err = gate.permit(Some("key")).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
    }
}

//! Authenticated call pipeline
//!
//! Every data-fetching operation runs the same ordered stages:
//!
//! 1. permit  - the access gate resolves the caller's credential
//! 2. fetch   - one upstream GET for the query descriptor
//! 3. extract - locate the payload at the extraction path
//!
//! [`Call`] is the per-invocation context the stages apply to. Services
//! pick the terminal form: [`Call::body`] when the normalizer needs the
//! whole response (series keys that depend on the data), [`Call::payload`]
//! for a raw sub-object, [`Call::typed`] when the extracted sub-object must
//! also satisfy a declared record shape.

use crate::error::Result;
use crate::extract::{self, ExtractPath};
use crate::state::AppState;
use crate::upstream::query::QueryDescriptor;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub struct Call<'a> {
    state: &'a AppState,
    credential: Option<&'a str>,
}

impl<'a> Call<'a> {
    pub fn new(state: &'a AppState, credential: Option<&'a str>) -> Self {
        Self { state, credential }
    }

    /// Stages 1–2: permit, then fetch the full response body.
    pub async fn body(&self, descriptor: QueryDescriptor) -> Result<Value> {
        let key = self.state.gate().permit(self.credential).await?;
        self.state.upstream().fetch(&descriptor, Some(&key)).await
    }

    /// Stages 1–3: permit, fetch, and extract the payload at `path`.
    pub async fn payload(&self, descriptor: QueryDescriptor, path: ExtractPath) -> Result<Value> {
        let body = self.body(descriptor).await?;
        Ok(extract::walk(&body, path)?.clone())
    }

    /// Stages 1–3 plus the typed post-step on the extracted payload.
    pub async fn typed<T: DeserializeOwned>(
        &self,
        descriptor: QueryDescriptor,
        path: ExtractPath,
    ) -> Result<T> {
        let body = self.body(descriptor).await?;
        extract::walk_as(&body, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::AppError;
    use crate::state::AppState;
    use crate::upstream::mock::MockUpstream;
    use serde_json::json;

    fn state_with_body(body: Value) -> (AppState, std::sync::Arc<MockUpstream>) {
        let upstream = MockUpstream::new(body);
        let state = AppState::with_upstream(Config::for_tests(), upstream.clone());
        (state, upstream)
    }

    #[tokio::test]
    async fn test_denial_short_circuits_before_fetch() {
        let (state, upstream) = state_with_body(json!({"Global Quote": {}}));
        let call = Call::new(&state, None);

        let err = call
            .body(QueryDescriptor::new("TIME_SERIES_DAILY"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingCredential));
        assert_eq!(upstream.call_count(), 0);
    }

    #[tokio::test]
    async fn test_full_pipeline_extracts_payload() {
        let (state, upstream) = state_with_body(json!({
            "Global Quote": {"01. symbol": "IBM"}
        }));
        let call = Call::new(&state, Some("demo"));

        let payload = call
            .payload(
                QueryDescriptor::new("GLOBAL_QUOTE").with("symbol", "IBM"),
                ExtractPath::new(&["Global Quote"]),
            )
            .await
            .unwrap();

        assert_eq!(payload["01. symbol"], "IBM");
        // one probe plus one data fetch
        assert_eq!(upstream.call_count(), 2);
    }

    #[tokio::test]
    async fn test_upstream_error_surfaces_before_extraction() {
        let (state, _upstream) = state_with_body(json!({"Error Message": "Invalid API call"}));
        let call = Call::new(&state, Some("demo"));

        // the probe itself sees the in-band error and degrades to a denial
        let err = call
            .payload(
                QueryDescriptor::new("TIME_SERIES_DAILY").with("symbol", "IBM"),
                ExtractPath::new(&["Time Series (Daily)"]),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
    }
}

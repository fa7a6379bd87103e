#[cfg(feature = "test-adapters")]
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use ecocomp_core::{CompareError, ObservationRecord, SeriesResult};

/// Historical-indicator abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait TeHistorical: Send + Sync {
    /// Fetch the full history of `indicator` for `country`, in provider order.
    async fn fetch_historical(
        &self,
        country: &str,
        indicator: &str,
    ) -> Result<SeriesResult, CompareError>;
}

/// Default provider endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tradingeconomics.com";

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections internally.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for RealAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealAdapter")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl RealAdapter {
    /// Wrap an existing HTTP client.
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Build a client with the given request timeout.
    ///
    /// # Errors
    /// Returns `Config` if the HTTP client cannot be constructed.
    pub fn with_timeout(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompareError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompareError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(client, base_url, api_key))
    }

    /// `{base}/historical/country/{country}/indicator/{indicator}?c={key}` with
    /// each path segment percent-encoded.
    ///
    /// # Errors
    /// Returns `Config` if the base URL cannot carry path segments.
    pub fn historical_url(&self, country: &str, indicator: &str) -> Result<Url, CompareError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                CompareError::Config(format!("base URL {} cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(["historical", "country", country, "indicator", indicator]);
        url.query_pairs_mut().clear().append_pair("c", &self.api_key);
        Ok(url)
    }
}

fn upstream(msg: impl Into<String>) -> CompareError {
    CompareError::upstream(crate::TeConnector::KEY.as_str(), msg)
}

/// Error bodies are kept as JSON when they parse, otherwise as text.
fn error_payload(body: &str) -> Option<serde_json::Value> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    Some(
        serde_json::from_str(body)
            .unwrap_or_else(|_| serde_json::Value::String(body.to_string())),
    )
}

/// Decode a 2xx body. Anything other than an array of observations is malformed.
pub(crate) fn decode_series(body: &str) -> Result<SeriesResult, CompareError> {
    let raw: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| upstream(format!("malformed payload: {e}")))?;
    if !raw.is_array() {
        return Err(upstream("malformed payload: expected a JSON array"));
    }
    serde_json::from_value::<Vec<ObservationRecord>>(raw)
        .map_err(|e| upstream(format!("malformed payload: {e}")))
}

#[async_trait]
impl TeHistorical for RealAdapter {
    async fn fetch_historical(
        &self,
        country: &str,
        indicator: &str,
    ) -> Result<SeriesResult, CompareError> {
        let url = self.historical_url(country, indicator)?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| upstream(format!("request failed: {}", e.without_url())))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| upstream(format!("failed to read body: {}", e.without_url())))?;

        if !status.is_success() {
            return Err(CompareError::upstream_status(
                crate::TeConnector::KEY.as_str(),
                status.as_u16(),
                error_payload(&body),
            ));
        }
        decode_series(&body)
    }
}

#[cfg(feature = "test-adapters")]
impl dyn TeHistorical {
    /// Build a `TeHistorical` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn TeHistorical>
    where
        F: Send + Sync + 'static + Fn(String, String) -> Result<SeriesResult, CompareError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> TeHistorical for FnHist<F>
        where
            F: Send + Sync + 'static + Fn(String, String) -> Result<SeriesResult, CompareError>,
        {
            async fn fetch_historical(
                &self,
                country: &str,
                indicator: &str,
            ) -> Result<SeriesResult, CompareError> {
                (self.0)(country.to_string(), indicator.to_string())
            }
        }
        Arc::new(FnHist(f))
    }
}

use std::time::Duration;

use ecocomp_core::CompareError;
use url::Url;

use crate::TeConnector;
use crate::adapter::{DEFAULT_BASE_URL, RealAdapter};

/// Builder for a [`TeConnector`] backed by the real HTTP adapter.
///
/// Only the API key is required; it is sent as the `c` query parameter and
/// never logged.
#[derive(Clone)]
pub struct TeConnectorBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl Default for TeConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TeConnectorBuilder {
    /// Defaults: the public endpoint and a 30s HTTP timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            client: None,
        }
    }

    /// Provider API key (`guest:guest` works for the free tier).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the provider base URL (tests point this at a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// HTTP timeout applied by the underlying client. Ignored when a custom
    /// client is supplied.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `Config` if the API key is missing or blank, if the base URL
    /// does not parse, or if the HTTP client cannot be built.
    pub fn build(self) -> Result<TeConnector, CompareError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CompareError::Config("API key is required".to_string()))?;
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| CompareError::Config(format!("invalid base URL {:?}: {e}", self.base_url)))?;
        let adapter = match self.client {
            Some(client) => RealAdapter::new(client, base_url, api_key),
            None => RealAdapter::with_timeout(base_url, api_key, self.timeout)?,
        };
        Ok(TeConnector::from_real_adapter(adapter))
    }
}

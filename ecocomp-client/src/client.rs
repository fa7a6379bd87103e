use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use ecocomp_core::{MergedSeries, SeriesLabel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::decode::decode_comparison;

/// Shown when the server gave no usable error text.
pub const GENERIC_ERROR: &str = "Something went wrong!";

/// The four selections of the comparison form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub country1: String,
    pub country2: String,
    pub indicator1: String,
    pub indicator2: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            country1: "Sweden".to_string(),
            country2: "Mexico".to_string(),
            indicator1: "GDP".to_string(),
            indicator2: "Inflation Rate".to_string(),
        }
    }
}

impl Selection {
    /// Column labels in table/chart order.
    #[must_use]
    pub fn labels(&self) -> (SeriesLabel, SeriesLabel) {
        (
            SeriesLabel::new(&self.country1, &self.indicator1),
            SeriesLabel::new(&self.country2, &self.indicator2),
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("a comparison is already being fetched")]
    Busy,

    #[error("server responded with HTTP {status}: {error}")]
    Server { status: u16, error: Value },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("undecodable response: {0}")]
    Decode(String),
}

impl ClientError {
    /// The single line shown next to the form.
    ///
    /// A string `error` from the server is shown as-is, an object `error` as
    /// its JSON text; anything else is the generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                error: Value::String(s),
                ..
            } => s.clone(),
            Self::Server {
                error: obj @ Value::Object(_),
                ..
            } => obj.to_string(),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

/// Clears the loading flag when dropped, on every exit path.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, ClientError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ClientError::Busy)?;
        Ok(Self(flag))
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// HTTP client for the comparison service.
pub struct ComparisonClient {
    http: reqwest::Client,
    base_url: Url,
    loading: AtomicBool,
}

impl ComparisonClient {
    /// Build a client for the service at `base_url` (e.g. `http://localhost:5000`).
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `base_url` does not parse or cannot carry a path,
    /// and `Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Self::with_http_client(base_url, http)
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            http,
            base_url,
            loading: AtomicBool::new(false),
        })
    }

    /// True while a [`fetch_comparison`](Self::fetch_comparison) call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// `{base}/compare?country1=..&country2=..&indicator1=..&indicator2=..`
    pub fn compare_url(&self, sel: &Selection) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("compare");
        url.query_pairs_mut()
            .clear()
            .append_pair("country1", &sel.country1)
            .append_pair("country2", &sel.country2)
            .append_pair("indicator1", &sel.indicator1)
            .append_pair("indicator2", &sel.indicator2);
        Ok(url)
    }

    /// Fetch both series and merge them by position.
    ///
    /// Rows pair `country1[i]` with `country2[i]`, take the date from country1,
    /// and are sorted by date, most recent first.
    ///
    /// # Errors
    /// - `Busy` if another fetch is in flight.
    /// - `Server` for a non-2xx response, carrying the body's `error` field.
    /// - `Transport` or `Decode` when no JSON body could be obtained.
    pub async fn fetch_comparison(&self, sel: &Selection) -> Result<MergedSeries, ClientError> {
        let _loading = LoadingGuard::acquire(&self.loading)?;
        let url = self.compare_url(sel)?;
        tracing::debug!(%url, "fetching comparison");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let error = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| body.get("error").cloned())
                .unwrap_or(Value::Null);
            tracing::warn!(status = status.as_u16(), %error, "comparison request failed");
            return Err(ClientError::Server {
                status: status.as_u16(),
                error,
            });
        }

        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))?;
        let decoded = decode_comparison(&body);
        let (first, second) = sel.labels();
        Ok(MergedSeries::build_from_slots(
            first,
            second,
            &decoded.country1,
            &decoded.country2,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compare_url_encodes_selection() {
        let client = ComparisonClient::new("http://localhost:5000").unwrap();
        let url = client.compare_url(&Selection::default()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/compare?country1=Sweden&country2=Mexico&indicator1=GDP&indicator2=Inflation+Rate"
        );
    }

    #[test]
    fn compare_url_keeps_base_path() {
        let client = ComparisonClient::new("https://example.org/api/").unwrap();
        let url = client.compare_url(&Selection::default()).unwrap();
        assert!(url.as_str().starts_with("https://example.org/api/compare?"));
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            ComparisonClient::new("localhost"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            ComparisonClient::new("mailto:someone@example.org"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn user_message_rules() {
        let s = ClientError::Server {
            status: 400,
            error: json!("Only Sweden and Mexico are allowed for free users."),
        };
        assert_eq!(
            s.user_message(),
            "Only Sweden and Mexico are allowed for free users."
        );
        let o = ClientError::Server {
            status: 500,
            error: json!({"Message": "No Access"}),
        };
        assert_eq!(o.user_message(), r#"{"Message":"No Access"}"#);
        let n = ClientError::Server {
            status: 502,
            error: Value::Null,
        };
        assert_eq!(n.user_message(), GENERIC_ERROR);
        assert_eq!(ClientError::Busy.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn loading_guard_is_exclusive_and_resets() {
        let flag = AtomicBool::new(false);
        {
            let _g = LoadingGuard::acquire(&flag).unwrap();
            assert!(flag.load(Ordering::Acquire));
            assert!(matches!(
                LoadingGuard::acquire(&flag),
                Err(ClientError::Busy)
            ));
        }
        assert!(!flag.load(Ordering::Acquire));
    }
}

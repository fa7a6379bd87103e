use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::country::allowed_phrase;

/// Unified error type for the ecocomp workspace.
///
/// Covers input validation, upstream provider failures (transport, non-2xx,
/// malformed payloads), timeouts, and configuration problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
#[non_exhaustive]
pub enum CompareError {
    /// A country failed the allow-list check.
    #[error("Only {} are allowed for free users (got {country:?}).", allowed_phrase(.allowed))]
    InvalidCountry {
        /// The country as received, before normalization.
        country: String,
        /// Canonical allow-list entries at the time of rejection.
        allowed: Vec<String>,
    },

    /// Invalid or missing input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The upstream provider could not produce a usable series.
    ///
    /// Raised for transport errors, non-2xx responses and payloads that are
    /// not an array of observations.
    #[error("{connector} failed: {msg}")]
    Upstream {
        /// Connector name that failed.
        connector: String,
        /// HTTP status returned by the provider, when one was received.
        status: Option<u16>,
        /// Provider error payload, when the body could be read.
        payload: Option<serde_json::Value>,
        /// Human-readable error message.
        msg: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Label of the series being fetched (e.g. "Sweden/GDP").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Operation label for which the request timed out.
        capability: String,
    },

    /// Configuration or builder misuse.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl CompareError {
    /// Helper: build an `InvalidCountry` error.
    pub fn invalid_country<I, S>(country: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidCountry {
            country: country.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build an `Upstream` error without status or payload.
    pub fn upstream(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            connector: connector.into(),
            status: None,
            payload: None,
            msg: msg.into(),
        }
    }

    /// Helper: build an `Upstream` error for a non-2xx provider response.
    pub fn upstream_status(
        connector: impl Into<String>,
        status: u16,
        payload: Option<serde_json::Value>,
    ) -> Self {
        Self::Upstream {
            connector: connector.into(),
            status: Some(status),
            payload,
            msg: format!("provider responded with HTTP {status}"),
        }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true when the caller supplied bad input and can fix it by re-prompting.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidCountry { .. } | Self::InvalidArg(_))
    }

    /// Returns true when the failure originated from fetching upstream data.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::ProviderTimeout { .. } | Self::RequestTimeout { .. }
        )
    }

    /// Provider payload carried by an `Upstream` error, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Upstream { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }
}

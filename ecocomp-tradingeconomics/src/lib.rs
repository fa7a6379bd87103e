//! ecocomp-tradingeconomics
//!
//! Public connector that implements `IndicatorConnector` on top of the Trading
//! Economics historical-indicator endpoint:
//! `GET {base}/historical/country/{country}/indicator/{indicator}?c={api_key}`.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;

use std::sync::Arc;

use adapter::{RealAdapter, TeHistorical};
use async_trait::async_trait;
use ecocomp_core::{
    CompareError, SeriesRequest, SeriesResult,
    connector::{ConnectorKey, HistoricalProvider, IndicatorConnector},
};

pub use builder::TeConnectorBuilder;

/// Public connector type. Production users construct it with [`TeConnector::builder`].
pub struct TeConnector {
    history: Arc<dyn TeHistorical>,
}

impl TeConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("ecocomp-tradingeconomics");

    fn normalize_error(e: CompareError) -> CompareError {
        match e {
            CompareError::Other(msg) => CompareError::upstream(Self::KEY.as_str(), msg),
            CompareError::Upstream {
                connector: _,
                status,
                payload,
                msg,
            } => CompareError::Upstream {
                connector: Self::KEY.as_str().to_string(),
                status,
                payload,
                msg,
            },
            other => other,
        }
    }

    /// Start configuring a connector backed by the real HTTP adapter.
    #[must_use]
    pub fn builder() -> TeConnectorBuilder {
        TeConnectorBuilder::new()
    }

    /// Build from a concrete `RealAdapter`.
    #[must_use]
    pub fn from_real_adapter(adapter: RealAdapter) -> Self {
        Self {
            history: Arc::new(adapter),
        }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_adapter(history: Arc<dyn TeHistorical>) -> Self {
        Self { history }
    }
}

impl IndicatorConnector for TeConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Trading Economics"
    }

    fn as_historical_provider(&self) -> Option<&dyn HistoricalProvider> {
        Some(self as &dyn HistoricalProvider)
    }
}

#[async_trait]
impl HistoricalProvider for TeConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ecocomp_tradingeconomics::historical",
            skip(self),
            fields(country = %req.country, indicator = %req.indicator),
        )
    )]
    async fn historical(&self, req: &SeriesRequest) -> Result<SeriesResult, CompareError> {
        let series = self
            .history
            .fetch_historical(&req.country, &req.indicator)
            .await
            .map_err(Self::normalize_error)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(records = series.len(), "fetched historical series");
        Ok(series)
    }
}

//! Mock connectors for tests and demos.
//!
//! - [`MockConnector`] serves static fixtures for the four free-tier countries
//!   and the two page indicators.
//! - [`dynamic::DynamicMockConnector`] is scripted from the outside through a
//!   controller and records call order.
use async_trait::async_trait;
use ecocomp_core::connector::{HistoricalProvider, IndicatorConnector};
use ecocomp_core::{CompareError, SeriesRequest, SeriesResult};

pub mod dynamic;
mod fixtures;

pub use dynamic::{CallEvent, DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// Indicator names trigger special behavior:
/// - `"FAIL"`: returns an upstream error with a provider-style JSON payload.
/// - `"TIMEOUT"`: sleeps briefly before answering; the comparator may time out
///   depending on configuration.
///
/// Unknown `(country, indicator)` pairs return an empty series, as the real
/// provider does.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Static connector name.
    pub const NAME: &'static str = "ecocomp-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(req: &SeriesRequest) -> Result<(), CompareError> {
        match req.indicator.as_str() {
            "FAIL" => Err(CompareError::upstream_status(
                Self::NAME,
                500,
                Some(serde_json::json!({ "message": format!("forced failure: {}", req.label()) })),
            )),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl IndicatorConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_historical_provider(&self) -> Option<&dyn HistoricalProvider> {
        Some(self as &dyn HistoricalProvider)
    }
}

#[async_trait]
impl HistoricalProvider for MockConnector {
    async fn historical(&self, req: &SeriesRequest) -> Result<SeriesResult, CompareError> {
        Self::maybe_fail_or_timeout(req).await?;
        Ok(fixtures::history::by_series(&req.country, &req.indicator).unwrap_or_default())
    }
}

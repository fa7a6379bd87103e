use async_trait::async_trait;

use crate::{CompareError, SeriesRequest, SeriesResult};
pub use ecocomp_types::ConnectorKey;

/// Focused role trait for connectors that serve historical indicator series.
#[async_trait]
pub trait HistoricalProvider: Send + Sync {
    /// Fetch the full history of `req.indicator` for `req.country`.
    ///
    /// Implementations return records in provider order; callers sort.
    async fn historical(&self, req: &SeriesRequest) -> Result<SeriesResult, CompareError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait IndicatorConnector: Send + Sync {
    /// A stable identifier (e.g., "ecocomp-tradingeconomics", "ecocomp-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise historical capability by returning a usable trait object reference when supported.
    fn as_historical_provider(&self) -> Option<&dyn HistoricalProvider> {
        None
    }
}

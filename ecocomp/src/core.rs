#[cfg(feature = "tracing")]
use std::convert::TryFrom;
use std::sync::Arc;
use std::time::Duration;

use ecocomp_core::{AllowList, ComparatorConfig, CompareError, FetchMode, IndicatorConnector};

/// Orchestrator that validates comparison requests and fetches both series.
pub struct Comparator {
    pub(crate) connectors: Vec<Arc<dyn IndicatorConnector>>,
    pub(crate) cfg: ComparatorConfig,
}

/// Builder for constructing a `Comparator` with custom configuration.
pub struct ComparatorBuilder {
    connectors: Vec<Arc<dyn IndicatorConnector>>,
    cfg: ComparatorConfig,
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparatorBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: the four free-tier countries, concurrent fetches, no fetch
    /// delay, a 10s provider timeout and no overall deadline. At least one
    /// connector must be registered via [`with_connector`](Self::with_connector).
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: ComparatorConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// The first registered connector that advertises historical capability
    /// serves every fetch; later ones are ignored.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn IndicatorConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ComparatorConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the country allow-list.
    #[must_use]
    pub fn allowed_countries(mut self, list: AllowList) -> Self {
        self.cfg.allowed_countries = list;
        self
    }

    /// Select whether the two series are fetched concurrently or in order.
    #[must_use]
    pub const fn fetch_mode(mut self, mode: FetchMode) -> Self {
        self.cfg.fetch_mode = mode;
        self
    }

    /// Pause for `delay` before each provider fetch.
    #[must_use]
    pub const fn fetch_delay(mut self, delay: Duration) -> Self {
        self.cfg.fetch_delay = delay;
        self
    }

    /// Set the per-fetch timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Bound the whole comparison, fetch delays included.
    ///
    /// When exceeded, returns a `RequestTimeout` error for `"compare"`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Comparator`.
    ///
    /// # Errors
    /// Returns `Config` if no connector is registered, if none of them serves
    /// historical series, or if the allow-list is empty.
    pub fn build(self) -> Result<Comparator, CompareError> {
        if self.connectors.is_empty() {
            return Err(CompareError::Config(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if !self
            .connectors
            .iter()
            .any(|c| c.as_historical_provider().is_some())
        {
            return Err(CompareError::Config(
                "no registered connector serves historical series".to_string(),
            ));
        }
        if self.cfg.allowed_countries.is_empty() {
            return Err(CompareError::Config(
                "country allow-list is empty".to_string(),
            ));
        }

        Ok(Comparator {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an error raised inside a connector to that connector.
///
/// Upstream failures and timeouts already name their source and pass through;
/// anything else is wrapped as an `Upstream` error.
pub fn tag_err(connector: &str, e: CompareError) -> CompareError {
    match e {
        e @ (CompareError::Upstream { .. }
        | CompareError::ProviderTimeout { .. }
        | CompareError::RequestTimeout { .. }) => e,
        other => CompareError::upstream(connector, other.to_string()),
    }
}

/// Run `fut`, failing with `RequestTimeout(capability)` when `deadline` elapses first.
pub async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    capability: &str,
    fut: Fut,
) -> Result<T, CompareError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .map_err(|_| CompareError::request_timeout(capability)),
        None => Ok(fut.await),
    }
}

impl Comparator {
    /// Start building a new `Comparator`.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use ecocomp_mock::MockConnector;
    ///
    /// let comparator = ecocomp::Comparator::builder()
    ///     .with_connector(Arc::new(MockConnector::new()))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> ComparatorBuilder {
        ComparatorBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ComparatorConfig {
        &self.cfg
    }

    /// Countries accepted by [`compare`](Self::compare).
    #[must_use]
    pub const fn allowed_countries(&self) -> &AllowList {
        &self.cfg.allowed_countries
    }

    pub(crate) fn historical_connector(&self) -> Result<&Arc<dyn IndicatorConnector>, CompareError> {
        self.connectors
            .iter()
            .find(|c| c.as_historical_provider().is_some())
            .ok_or_else(|| {
                CompareError::Config("no registered connector serves historical series".into())
            })
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ecocomp::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, CompareError>
    where
        Fut: core::future::Future<Output = Result<T, CompareError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(CompareError::provider_timeout(connector_name, capability)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecocomp_mock::MockConnector;

    struct NoCapability;

    impl IndicatorConnector for NoCapability {
        fn name(&self) -> &'static str {
            "no-capability"
        }
    }

    #[test]
    fn build_requires_a_connector() {
        let err = Comparator::builder().build().err().unwrap();
        assert!(matches!(err, CompareError::Config(_)));
    }

    #[test]
    fn build_requires_historical_capability() {
        let err = Comparator::builder()
            .with_connector(Arc::new(NoCapability))
            .build()
            .err()
            .unwrap();
        match err {
            CompareError::Config(msg) => assert!(msg.contains("historical")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn build_rejects_empty_allow_list() {
        let err = Comparator::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .allowed_countries(AllowList::new(Vec::<String>::new()))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, CompareError::Config(_)));
    }

    #[test]
    fn builder_modifiers_land_in_config() {
        let c = Comparator::builder()
            .with_connector(Arc::new(NoCapability))
            .with_connector(Arc::new(MockConnector::new()))
            .fetch_mode(FetchMode::Sequential)
            .fetch_delay(Duration::from_secs(1))
            .provider_timeout(Duration::from_millis(250))
            .request_timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        assert_eq!(c.config().fetch_mode, FetchMode::Sequential);
        assert_eq!(c.config().fetch_delay, Duration::from_secs(1));
        assert_eq!(c.config().provider_timeout, Duration::from_millis(250));
        assert_eq!(c.config().request_timeout, Some(Duration::from_secs(3)));
        assert_eq!(c.historical_connector().unwrap().name(), MockConnector::NAME);
    }

    #[test]
    fn tag_err_wraps_only_unattributed_errors() {
        let wrapped = tag_err("te", CompareError::Other("boom".into()));
        match wrapped {
            CompareError::Upstream { connector, msg, .. } => {
                assert_eq!(connector, "te");
                assert!(msg.contains("boom"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        let timeout = CompareError::provider_timeout("te", "Sweden/GDP");
        assert_eq!(tag_err("other", timeout.clone()), timeout);
    }

    #[tokio::test(start_paused = true)]
    async fn request_deadline_maps_to_request_timeout() {
        let res = with_request_deadline(
            Some(Duration::from_millis(10)),
            "compare",
            tokio::time::sleep(Duration::from_secs(1)),
        )
        .await;
        assert_eq!(res, Err(CompareError::request_timeout("compare")));

        let ok = with_request_deadline(None, "compare", async { 7 }).await;
        assert_eq!(ok, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn provider_timeout_is_attributed() {
        let res: Result<(), _> = Comparator::provider_call_with_timeout(
            "slow",
            "Sweden/GDP",
            Duration::from_millis(5),
            async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok(())
            },
        )
        .await;
        assert_eq!(
            res,
            Err(CompareError::provider_timeout("slow", "Sweden/GDP"))
        );
    }
}

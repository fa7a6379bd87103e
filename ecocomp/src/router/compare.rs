use std::sync::Arc;

use crate::Comparator;
use crate::core::{tag_err, with_request_deadline};
use crate::router::util::{collapse_pair, join_pair_with_deadline};
use ecocomp_core::{
    CompareError, ComparisonRequest, ComparisonResponse, FetchMode, IndicatorConnector,
    SeriesRequest, SeriesResult, sort_desc_by_date,
};

impl Comparator {
    /// Validate a comparison request and fetch both series.
    ///
    /// Behavior:
    /// - Country names are normalized (trimmed, first letter upper-case, rest
    ///   lower-case) and matched against the allow-list; the canonical spelling
    ///   of the matching entry is what the provider receives.
    /// - Both series are fetched according to the configured [`FetchMode`],
    ///   each after the configured fetch delay and under the provider timeout.
    /// - Each series is stable-sorted by `DateTime`, most recent first.
    ///
    /// # Errors
    /// - `InvalidCountry` when either country is not allowed.
    /// - `InvalidArg` when an indicator is blank.
    /// - `Upstream`, `ProviderTimeout` or `RequestTimeout` when either fetch
    ///   fails; there is no partial result.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "ecocomp::router::compare",
            skip(self),
            fields(
                country1 = %req.country1,
                country2 = %req.country2,
                indicator1 = %req.indicator1,
                indicator2 = %req.indicator2,
            ),
        )
    )]
    pub async fn compare(&self, req: &ComparisonRequest) -> Result<ComparisonResponse, CompareError> {
        let (first, second) = self.validate(req).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "rejected comparison request");
        })?;
        let connector = Arc::clone(self.historical_connector()?);

        let fetched = match self.cfg.fetch_mode {
            FetchMode::Concurrent => {
                let (a, b) = join_pair_with_deadline(
                    self.fetch_series(&connector, &first),
                    self.fetch_series(&connector, &second),
                    self.cfg.request_timeout,
                )
                .await?;
                collapse_pair(a, b)
            }
            FetchMode::Sequential => {
                with_request_deadline(
                    self.cfg.request_timeout,
                    "compare",
                    self.fetch_in_order(&connector, &first, &second),
                )
                .await?
            }
        };

        let (mut country1, mut country2) = fetched.inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %_e, "comparison fetch failed");
        })?;
        sort_desc_by_date(&mut country1);
        sort_desc_by_date(&mut country2);
        Ok(ComparisonResponse { country1, country2 })
    }

    /// Resolve both countries and check both indicators, producing the two
    /// provider requests.
    pub(crate) fn validate(
        &self,
        req: &ComparisonRequest,
    ) -> Result<(SeriesRequest, SeriesRequest), CompareError> {
        let allowed = &self.cfg.allowed_countries;
        let country1 = allowed.resolve(&req.country1)?;
        let country2 = allowed.resolve(&req.country2)?;
        let indicator1 = non_blank("indicator1", &req.indicator1)?;
        let indicator2 = non_blank("indicator2", &req.indicator2)?;
        Ok((
            SeriesRequest::new(country1, indicator1),
            SeriesRequest::new(country2, indicator2),
        ))
    }

    async fn fetch_in_order(
        &self,
        connector: &Arc<dyn IndicatorConnector>,
        first: &SeriesRequest,
        second: &SeriesRequest,
    ) -> Result<(SeriesResult, SeriesResult), CompareError> {
        let a = self.fetch_series(connector, first).await?;
        let b = self.fetch_series(connector, second).await?;
        Ok((a, b))
    }

    async fn fetch_series(
        &self,
        connector: &Arc<dyn IndicatorConnector>,
        req: &SeriesRequest,
    ) -> Result<SeriesResult, CompareError> {
        if !self.cfg.fetch_delay.is_zero() {
            tokio::time::sleep(self.cfg.fetch_delay).await;
        }
        let provider = connector.as_historical_provider().ok_or_else(|| {
            CompareError::Config(format!("{} does not serve historical series", connector.name()))
        })?;
        Self::provider_call_with_timeout(
            connector.name(),
            &req.label(),
            self.cfg.provider_timeout,
            provider.historical(req),
        )
        .await
        .map_err(|e| tag_err(connector.name(), e))
    }
}

fn non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, CompareError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CompareError::InvalidArg(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

//! Ecocomp compares two economic indicator series fetched from a historical
//! data provider.
//!
//! Overview
//! - Validates both countries against a configurable allow-list (case-insensitive,
//!   canonical spelling forwarded upstream).
//! - Fetches the two `(country, indicator)` series through a connector that
//!   implements the `ecocomp_core` contracts.
//! - Sorts each series by `DateTime`, most recent first.
//!
//! Key behaviors and trade-offs
//! - Fetch mode:
//!   - `Concurrent`: both series are requested together; lowest latency.
//!   - `Sequential`: country1 first, then country2; combined with a fetch delay
//!     this stays under the burst limits of free-tier keys.
//! - Failures are terminal: if either fetch fails the comparison fails and no
//!   partial result is returned. When both fail, country1's error is reported.
//! - Each fetch is bounded by `provider_timeout`; the whole comparison can be
//!   bounded by `request_timeout`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use ecocomp::{Comparator, FetchMode};
//! use ecocomp_core::ComparisonRequest;
//!
//! let te = Arc::new(TeConnector::builder().api_key("guest:guest").build()?);
//! let comparator = Comparator::builder()
//!     .with_connector(te)
//!     .fetch_mode(FetchMode::Sequential)
//!     .fetch_delay(std::time::Duration::from_secs(1))
//!     .build()?;
//!
//! let out = comparator
//!     .compare(&ComparisonRequest::new("sweden", "mexico", "GDP", "Inflation Rate"))
//!     .await?;
//! assert!(ecocomp_core::is_sorted_desc(&out.country1));
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Comparator, ComparatorBuilder};
pub use ecocomp_core::{ComparatorConfig, CompareError, FetchMode};
pub use router::util::{collapse_pair, join_pair_with_deadline};

// Re-export core types for convenience
pub use ecocomp_core::{
    AllowList, ComparisonRequest, ComparisonResponse, HistoricalProvider, IndicatorConnector,
    ObservationRecord, SeriesRequest, SeriesResult,
};

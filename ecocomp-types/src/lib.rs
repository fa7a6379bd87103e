//! Ecocomp-specific data transfer objects, configuration primitives and the
//! shared error type.
#![warn(missing_docs)]

mod config;
mod connector;
mod country;
mod error;
mod series;

pub use config::{ComparatorConfig, FetchMode};
pub use connector::ConnectorKey;
pub use country::{AllowList, DEFAULT_ALLOWED_COUNTRIES, allowed_phrase, normalize_country};
pub use error::CompareError;
pub use series::{
    ComparisonRequest, ComparisonResponse, DATETIME_FORMAT, KNOWN_INDICATORS, ObservationRecord,
    SeriesRequest, SeriesResult, parse_provider_datetime,
};

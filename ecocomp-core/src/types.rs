//! Re-export of foundational types from `ecocomp-types`.
// Consolidated re-exports so downstream crates can depend on `ecocomp-core` only

pub use ecocomp_types::{CompareError, ComparatorConfig, ConnectorKey, FetchMode};

pub use ecocomp_types::{
    AllowList, DEFAULT_ALLOWED_COUNTRIES, allowed_phrase, normalize_country,
};

pub use ecocomp_types::{
    ComparisonRequest, ComparisonResponse, DATETIME_FORMAT, KNOWN_INDICATORS, ObservationRecord,
    SeriesRequest, SeriesResult, parse_provider_datetime,
};

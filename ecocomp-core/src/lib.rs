//! ecocomp-core
//!
//! Core types, traits, and utilities shared across the ecocomp workspace.
//!
//! - `types`: re-exports of the shared DTOs, configuration and error type.
//! - `connector`: the `IndicatorConnector` trait and the `HistoricalProvider` role trait.
//! - `timeseries`: descending sort of provider series and the client-side positional merge.
#![warn(missing_docs)]

/// Connector capability traits and the primary `IndicatorConnector` interface.
pub mod connector;
/// Time-series utilities for ordering and merging observation series.
pub mod timeseries;
pub mod types;

pub use connector::{HistoricalProvider, IndicatorConnector};
pub use timeseries::merge::{
    Cell, MergedRow, MergedSeries, SeriesLabel, merge_positional, merge_positional_slots,
};
pub use timeseries::sort::{is_sorted_desc, sort_desc_by_date, sort_rows_desc};
pub use types::*;

//! ecocomp-client
//!
//! Talks to the comparison service and turns its two series into something a
//! person can read:
//! - `client`: [`ComparisonClient::fetch_comparison`] with a loading flag and
//!   user-facing error strings.
//! - `decode`: tolerant parsing of the service response.
//! - `render`: the first rows as a text table, and an SVG line chart.
//! - `cli`: argument parsing for the `ecocomp` binary.

pub mod cli;
pub mod client;
pub mod decode;
pub mod render;

pub use client::{ClientError, ComparisonClient, Selection};
pub use decode::{DecodedComparison, decode_comparison};
pub use ecocomp_core::{Cell, MergedRow, MergedSeries, SeriesLabel};

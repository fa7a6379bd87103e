//! Time-series utilities shared by the comparator and the client.
//!
//! Modules include:
//! - `sort`: most-recent-first ordering of observation series and merged rows
//! - `merge`: positional merge of two series into chartable rows
/// Positional merge of two series into rows.
pub mod merge;
/// Stable descending sort helpers.
pub mod sort;

//! Presentation of a merged comparison.

pub mod chart;
pub mod table;

pub use chart::{ChartError, render_svg};
pub use table::{NO_DATA, Table, comparison_table};

/// How many rows the comparison table shows.
pub const DEFAULT_TABLE_ROWS: usize = 10;

use core::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::ObservationRecord;
use crate::timeseries::sort::sort_rows_desc;

/// A merged cell: either an observed value or the `N/A` sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// An observed value.
    Value(f64),
    /// No observation at this position.
    NotAvailable,
}

impl Cell {
    /// Map an optional value into a cell.
    #[must_use]
    pub const fn from_option(v: Option<f64>) -> Self {
        match v {
            Some(v) => Self::Value(v),
            None => Self::NotAvailable,
        }
    }

    /// The numeric value, if any.
    #[must_use]
    pub const fn as_f64(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotAvailable => None,
        }
    }

    /// Returns true for `Cell::Value`.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => s.serialize_f64(*v),
            Self::NotAvailable => s.serialize_str("N/A"),
        }
    }
}

/// Identifies one of the two compared series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeriesLabel {
    /// Canonical country name.
    pub country: String,
    /// Indicator name.
    pub indicator: String,
}

impl SeriesLabel {
    /// Build a label.
    pub fn new(country: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            indicator: indicator.into(),
        }
    }

    /// Table header form: `"Sweden (GDP)"`.
    #[must_use]
    pub fn header(&self) -> String {
        format!("{} ({})", self.country, self.indicator)
    }
}

impl fmt::Display for SeriesLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.country, self.indicator)
    }
}

/// One chartable row built from the same index of both series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    /// Date portion of the first series' timestamp at this index.
    pub date: NaiveDate,
    /// First series value at this index.
    pub first: Cell,
    /// Second series value at this index, `N/A` when the second series is shorter.
    pub second: Cell,
}

/// Merge two series by index.
///
/// Output length always equals `first.len()`: surplus entries of `second` are
/// dropped and missing ones become `Cell::NotAvailable`. Rows are paired by
/// position, never by date. `second` is given as values so callers can keep
/// undecodable entries in place as `None`.
#[must_use]
pub fn merge_positional(first: &[ObservationRecord], second: &[Option<f64>]) -> Vec<MergedRow> {
    first
        .iter()
        .enumerate()
        .map(|(i, rec)| row_at(i, rec, second))
        .collect()
}

/// Merge by index where some `first` slots could not be read.
///
/// An empty slot produces no row but still consumes `second[i]`, so every
/// remaining row keeps the pairing it had in the original sequence.
#[must_use]
pub fn merge_positional_slots(
    first: &[Option<ObservationRecord>],
    second: &[Option<f64>],
) -> Vec<MergedRow> {
    first
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|rec| row_at(i, rec, second)))
        .collect()
}

fn row_at(i: usize, rec: &ObservationRecord, second: &[Option<f64>]) -> MergedRow {
    MergedRow {
        date: rec.date(),
        first: Cell::from_option(rec.value),
        second: Cell::from_option(second.get(i).copied().flatten()),
    }
}

/// Two labelled columns of positionally merged rows, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedSeries {
    /// Labels of the first and second column.
    pub columns: [SeriesLabel; 2],
    /// Merged rows sorted by date descending.
    pub rows: Vec<MergedRow>,
}

impl MergedSeries {
    /// Merge `first` and `second` positionally and sort the rows by date descending.
    #[must_use]
    pub fn build(
        first_label: SeriesLabel,
        second_label: SeriesLabel,
        first: &[ObservationRecord],
        second: &[Option<f64>],
    ) -> Self {
        Self::from_rows(first_label, second_label, merge_positional(first, second))
    }

    /// Like [`build`](Self::build), for a first series with unreadable slots.
    /// See [`merge_positional_slots`].
    #[must_use]
    pub fn build_from_slots(
        first_label: SeriesLabel,
        second_label: SeriesLabel,
        first: &[Option<ObservationRecord>],
        second: &[Option<f64>],
    ) -> Self {
        Self::from_rows(first_label, second_label, merge_positional_slots(first, second))
    }

    fn from_rows(first_label: SeriesLabel, second_label: SeriesLabel, mut rows: Vec<MergedRow>) -> Self {
        sort_rows_desc(&mut rows);
        Self {
            columns: [first_label, second_label],
            rows,
        }
    }

    /// Returns true when there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a row's cell by indicator name.
    ///
    /// The first column whose indicator matches wins; an unknown indicator
    /// yields `Cell::NotAvailable`.
    #[must_use]
    pub fn cell(&self, row: &MergedRow, indicator: &str) -> Cell {
        if self.columns[0].indicator == indicator {
            row.first
        } else if self.columns[1].indicator == indicator {
            row.second
        } else {
            Cell::NotAvailable
        }
    }

    /// Available `(date, value)` points of one column (0 or 1), in row order.
    pub fn points(&self, column: usize) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.rows.iter().filter_map(move |r| {
            let cell = if column == 0 { r.first } else { r.second };
            cell.as_f64().map(|v| (r.date, v))
        })
    }
}

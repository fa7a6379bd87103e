//! Shared helpers for ordering observation series.

use crate::ObservationRecord;
use crate::timeseries::merge::MergedRow;

/// Sort a series by `DateTime`, most recent first.
///
/// The sort is stable: records with equal timestamps keep their relative
/// input order.
pub fn sort_desc_by_date(series: &mut [ObservationRecord]) {
    series.sort_by(|a, b| b.date_time.cmp(&a.date_time));
}

/// Returns true if no record is older than the one following it.
#[must_use]
pub fn is_sorted_desc(series: &[ObservationRecord]) -> bool {
    series.windows(2).all(|w| w[0].date_time >= w[1].date_time)
}

/// Sort merged rows by date, most recent first (stable).
pub fn sort_rows_desc(rows: &mut [MergedRow]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(y: i32, m: u32, d: u32, v: f64) -> ObservationRecord {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ObservationRecord::new(ts, Some(v))
    }

    #[test]
    fn sorts_most_recent_first() {
        let mut s = vec![rec(2019, 1, 1, 1.0), rec(2021, 1, 1, 3.0), rec(2020, 1, 1, 2.0)];
        sort_desc_by_date(&mut s);
        let values: Vec<_> = s.iter().map(|r| r.value.unwrap()).collect();
        assert_eq!(values, vec![3.0, 2.0, 1.0]);
        assert!(is_sorted_desc(&s));
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let mut s = vec![
            rec(2020, 1, 1, 1.0),
            rec(2021, 1, 1, 9.0),
            rec(2020, 1, 1, 2.0),
            rec(2020, 1, 1, 3.0),
        ];
        sort_desc_by_date(&mut s);
        let values: Vec<_> = s.iter().map(|r| r.value.unwrap()).collect();
        assert_eq!(values, vec![9.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_and_single_are_sorted() {
        let mut empty: Vec<ObservationRecord> = vec![];
        sort_desc_by_date(&mut empty);
        assert!(is_sorted_desc(&empty));
        assert!(is_sorted_desc(&[rec(2020, 1, 1, 1.0)]));
    }
}

use ecocomp_core::{ObservationRecord, SeriesResult, parse_provider_datetime};

/// Fixture series in provider order (deliberately not sorted).
pub fn by_series(country: &str, indicator: &str) -> Option<SeriesResult> {
    let rows: &[(&str, f64)] = match (country, indicator) {
        ("Sweden", "GDP") => &[
            ("2020-12-31T00:00:00", 541.06),
            ("2021-12-31T00:00:00", 635.66),
            ("2019-12-31T00:00:00", 530.88),
        ],
        ("Sweden", "Inflation Rate") => &[
            ("2023-01-31T00:00:00", 12.3),
            ("2023-03-31T00:00:00", 10.6),
            ("2023-02-28T00:00:00", 12.0),
        ],
        ("Mexico", "GDP") => &[
            ("2019-12-31T00:00:00", 1269.4),
            ("2021-12-31T00:00:00", 1272.84),
            ("2020-12-31T00:00:00", 1090.52),
        ],
        ("Mexico", "Inflation Rate") => &[
            ("2023-02-28T00:00:00", 7.62),
            ("2023-01-31T00:00:00", 7.91),
            ("2023-03-31T00:00:00", 6.85),
        ],
        ("New Zealand", "GDP") => &[
            ("2021-12-31T00:00:00", 250.45),
            ("2019-12-31T00:00:00", 213.05),
            ("2020-12-31T00:00:00", 212.48),
        ],
        ("New Zealand", "Inflation Rate") => &[
            ("2022-06-30T00:00:00", 7.3),
            ("2022-12-31T00:00:00", 7.2),
            ("2022-09-30T00:00:00", 7.2),
        ],
        ("Thailand", "GDP") => &[
            ("2020-12-31T00:00:00", 500.46),
            ("2019-12-31T00:00:00", 544.26),
            ("2021-12-31T00:00:00", 505.98),
        ],
        ("Thailand", "Inflation Rate") => &[
            ("2023-03-31T00:00:00", 2.83),
            ("2023-01-31T00:00:00", 5.02),
            ("2023-02-28T00:00:00", 3.79),
        ],
        _ => return None,
    };
    Some(build(country, indicator, rows))
}

fn build(country: &str, indicator: &str, rows: &[(&str, f64)]) -> SeriesResult {
    rows.iter()
        .map(|(ts, value)| {
            let mut rec = ObservationRecord::new(
                parse_provider_datetime(ts).expect("valid fixture timestamp"),
                Some(*value),
            );
            rec.extra
                .insert("Country".into(), serde_json::Value::from(country));
            rec.extra
                .insert("Category".into(), serde_json::Value::from(indicator));
            rec
        })
        .collect()
}

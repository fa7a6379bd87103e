// Shared fixtures so tests can `use helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use ecocomp::{Comparator, ComparatorBuilder};
use ecocomp_core::{ComparisonRequest, ObservationRecord, SeriesRequest, SeriesResult};
use ecocomp_mock::{DynamicMockConnector, DynamicMockController, MockConnector};

pub const SWEDEN: &str = "Sweden";
pub const MEXICO: &str = "Mexico";
pub const GDP: &str = "GDP";
pub const INFLATION: &str = "Inflation Rate";

/// Midnight on the given day, as the provider reports yearly observations.
pub fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("invalid date")
        .and_hms_opt(0, 0, 0)
        .expect("invalid time")
}

/// Build a record with a `Tag` extra field so tests can track original order.
pub fn rec(y: i32, m: u32, d: u32, value: f64, tag: &str) -> ObservationRecord {
    let mut r = ObservationRecord::new(at(y, m, d), Some(value));
    r.extra
        .insert("Tag".to_string(), serde_json::Value::String(tag.to_string()));
    r
}

pub fn tags(series: &SeriesResult) -> Vec<String> {
    series
        .iter()
        .map(|r| {
            r.extra
                .get("Tag")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

pub fn page_request(country1: &str, country2: &str) -> ComparisonRequest {
    ComparisonRequest::new(country1, country2, GDP, INFLATION)
}

pub fn with_fixtures() -> ComparatorBuilder {
    Comparator::builder().with_connector(Arc::new(MockConnector::new()))
}

pub fn scripted() -> (ComparatorBuilder, DynamicMockController) {
    let (mock, ctrl) = DynamicMockConnector::new();
    (
        Comparator::builder()
            .with_connector(mock)
            .provider_timeout(Duration::from_secs(10)),
        ctrl,
    )
}

pub fn series_req(country: &str, indicator: &str) -> SeriesRequest {
    SeriesRequest::new(country, indicator)
}

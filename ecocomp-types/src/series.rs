//! Observation records and comparison envelopes exchanged between the
//! provider, the service and the client.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Indicators the comparison page offers out of the box.
pub const KNOWN_INDICATORS: &[&str] = &["GDP", "Inflation Rate"];

/// Wire format used when serializing `DateTime` fields.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a provider timestamp.
///
/// Accepts RFC 3339 (converted to UTC), a naive `YYYY-MM-DDTHH:MM:SS` with
/// optional fraction, or a bare `YYYY-MM-DD` (midnight).
#[must_use]
pub fn parse_provider_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    s.parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

mod provider_datetime {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&dt.format(DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_provider_datetime(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized DateTime {raw:?}")))
    }
}

mod lenient_value {
    use super::*;

    pub fn serialize<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
        v.serialize(s)
    }

    // Numbers pass through; numeric strings are parsed; anything else is absent.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let raw = serde_json::Value::deserialize(d)?;
        Ok(match raw {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    }
}

/// One data point returned by the historical-indicator provider.
///
/// Only `DateTime` and `Value` are interpreted; every other provider field
/// (`Country`, `Category`, `Frequency`, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Observation timestamp (UTC, naive).
    #[serde(rename = "DateTime", with = "provider_datetime")]
    pub date_time: NaiveDateTime,
    /// Observed value; `None` when the provider sent `null` or no value.
    #[serde(rename = "Value", with = "lenient_value", default)]
    pub value: Option<f64>,
    /// Remaining provider fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ObservationRecord {
    /// Construct a record with no extra provider fields.
    #[must_use]
    pub fn new(date_time: NaiveDateTime, value: Option<f64>) -> Self {
        Self {
            date_time,
            value,
            extra: serde_json::Map::new(),
        }
    }

    /// Date portion of the timestamp.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date_time.date()
    }
}

/// An ordered series of observations, most recent first once normalized.
pub type SeriesResult = Vec<ObservationRecord>;

/// A single `(country, indicator)` pair to fetch from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// Canonical country name (already validated).
    pub country: String,
    /// Indicator name as understood by the provider.
    pub indicator: String,
}

impl SeriesRequest {
    /// Build a series request.
    pub fn new(country: impl Into<String>, indicator: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            indicator: indicator.into(),
        }
    }

    /// Short label used in logs and timeout errors ("Sweden/GDP").
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.country, self.indicator)
    }
}

/// Inputs to a comparison, exactly as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// First country (raw, not yet normalized).
    pub country1: String,
    /// Second country (raw, not yet normalized).
    pub country2: String,
    /// Indicator fetched for the first country.
    pub indicator1: String,
    /// Indicator fetched for the second country.
    pub indicator2: String,
}

impl ComparisonRequest {
    /// Build a comparison request.
    pub fn new(
        country1: impl Into<String>,
        country2: impl Into<String>,
        indicator1: impl Into<String>,
        indicator2: impl Into<String>,
    ) -> Self {
        Self {
            country1: country1.into(),
            country2: country2.into(),
            indicator1: indicator1.into(),
            indicator2: indicator2.into(),
        }
    }
}

/// Both series of a comparison, each sorted by `DateTime` descending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonResponse {
    /// Series for `(country1, indicator1)`.
    pub country1: SeriesResult,
    /// Series for `(country2, indicator2)`.
    pub country2: SeriesResult,
}

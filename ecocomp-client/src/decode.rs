//! Tolerant decoding of `GET /compare` bodies.
//!
//! The page must stay usable whatever the service sends back, so nothing here
//! fails: a missing or non-array series is empty, a country2 element without
//! a usable `Value` is kept in place as `None`, and a country1 element without
//! a parseable `DateTime` is kept in place as `None` so it produces no row
//! while later rows keep their country2 partner.

use ecocomp_core::ObservationRecord;
use serde_json::Value;

/// Both series, ready for [`ecocomp_core::merge_positional_slots`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedComparison {
    pub country1: Vec<Option<ObservationRecord>>,
    pub country2: Vec<Option<f64>>,
}

fn elements<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn element_value(el: &Value) -> Option<f64> {
    match el.get("Value")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn decode_comparison(body: &Value) -> DecodedComparison {
    let country1 = elements(body, "country1")
        .iter()
        .map(|el| {
            let rec = serde_json::from_value::<ObservationRecord>(el.clone());
            if rec.is_err() {
                tracing::debug!(element = %el, "country1 element has no usable DateTime");
            }
            rec.ok()
        })
        .collect();
    let country2 = elements(body, "country2").iter().map(element_value).collect();
    DecodedComparison { country1, country2 }
}

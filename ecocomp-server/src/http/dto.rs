//! Request and response bodies specific to the HTTP layer.

use serde::{Deserialize, Serialize};

use ecocomp::{CompareError, ComparisonRequest};

/// Query string of `GET /compare`. Every field is required; they are optional
/// here so a missing one produces the JSON error body rather than axum's
/// plain-text rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareQuery {
    pub country1: Option<String>,
    pub country2: Option<String>,
    pub indicator1: Option<String>,
    pub indicator2: Option<String>,
}

impl CompareQuery {
    /// Convert into a comparison request, naming the first missing parameter.
    pub fn into_request(self) -> Result<ComparisonRequest, CompareError> {
        fn required(name: &str, v: Option<String>) -> Result<String, CompareError> {
            v.ok_or_else(|| CompareError::InvalidArg(format!("missing query parameter: {name}")))
        }
        Ok(ComparisonRequest::new(
            required("country1", self.country1)?,
            required("country2", self.country2)?,
            required("indicator1", self.indicator1)?,
            required("indicator2", self.indicator2)?,
        ))
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body: `{ "error": <string or provider JSON> }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_request_names_missing_parameter() {
        let q = CompareQuery {
            country1: Some("Sweden".into()),
            country2: Some("Mexico".into()),
            indicator1: Some("GDP".into()),
            indicator2: None,
        };
        assert_eq!(
            q.into_request().unwrap_err(),
            CompareError::InvalidArg("missing query parameter: indicator2".into())
        );
    }

    #[test]
    fn into_request_keeps_raw_values() {
        let q = CompareQuery {
            country1: Some("sweden".into()),
            country2: Some("MEXICO".into()),
            indicator1: Some("GDP".into()),
            indicator2: Some("Inflation Rate".into()),
        };
        let req = q.into_request().unwrap();
        assert_eq!(req.country1, "sweden");
        assert_eq!(req.indicator2, "Inflation Rate");
    }
}

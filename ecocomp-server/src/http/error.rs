//! HTTP error handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use ecocomp::CompareError;

use super::dto::ErrorBody;

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub struct AppError(pub CompareError);

impl From<CompareError> for AppError {
    fn from(err: CompareError) -> Self {
        Self(err)
    }
}

impl AppError {
    /// 400 for caller mistakes, 500 for everything else.
    pub const fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Provider payloads are forwarded as-is; other errors become their message.
    pub fn body(&self) -> ErrorBody {
        let error = self
            .0
            .payload()
            .cloned()
            .unwrap_or_else(|| serde_json::Value::String(self.0.to_string()));
        ErrorBody { error }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // The comparator already logged failures it produced.
        tracing::debug!(%status, error = %self.0, "request failed");
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_country_is_bad_request_with_message() {
        let e = AppError(CompareError::invalid_country("France", ["Sweden", "Mexico"]));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            e.body().error,
            serde_json::json!("Only Sweden and Mexico are allowed for free users (got \"France\").")
        );
    }

    #[test]
    fn upstream_payload_is_forwarded() {
        let payload = serde_json::json!({ "Message": "No Access" });
        let e = AppError(CompareError::upstream_status("te", 403, Some(payload.clone())));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.body().error, payload);
    }

    #[test]
    fn timeouts_without_payload_use_message() {
        let e = AppError(CompareError::provider_timeout("te", "Sweden/GDP"));
        assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            e.body().error,
            serde_json::json!("provider timed out: Sweden/GDP via te")
        );
    }
}

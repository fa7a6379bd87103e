//! HTTP handlers. Each delegates to the shared `Comparator`.

use axum::{
    Json,
    extract::{Query, State},
};

use ecocomp::ComparisonResponse;

use super::dto::{CompareQuery, HealthResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
pub async fn root() -> &'static str {
    "Server is running!"
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /compare
///
/// Validates both countries, fetches both series and returns them sorted by
/// `DateTime`, most recent first.
pub async fn compare(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> HandlerResult<ComparisonResponse> {
    let req = query.into_request()?;
    let out = state.comparator.compare(&req).await?;
    tracing::info!(
        country1 = %req.country1,
        country2 = %req.country2,
        rows1 = out.country1.len(),
        rows2 = out.country2.len(),
        "comparison served"
    );
    Ok(Json(out))
}

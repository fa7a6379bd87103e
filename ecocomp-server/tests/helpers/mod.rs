#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use ecocomp::Comparator;
use ecocomp_server::{AppState, create_router};

pub fn app(comparator: Comparator) -> Router {
    create_router(AppState::new(comparator))
}

/// Issue a GET against the router and decode the body as JSON (or a JSON
/// string for non-JSON bodies).
pub async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
    });
    (status, body)
}

pub fn datetimes(v: &serde_json::Value) -> Vec<String> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|r| r["DateTime"].as_str().unwrap().to_string())
        .collect()
}

pub fn is_desc(xs: &[String]) -> bool {
    xs.windows(2).all(|w| w[0] >= w[1])
}

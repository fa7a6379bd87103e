//! HTTP front end for the ecocomp comparator.
//!
//! - `config`: environment-driven [`ServerConfig`].
//! - `http`: axum router, handlers and error mapping.
//! - `shutdown`: graceful-shutdown trigger for `axum::serve`.
//! - `tracing_init`: subscriber setup shared by the binary and tests.

pub mod config;
pub mod http;
pub mod shutdown;
pub mod tracing_init;

use std::sync::Arc;

use ecocomp::{Comparator, CompareError};
use ecocomp_tradingeconomics::TeConnector;

pub use config::ServerConfig;
pub use http::{AppState, create_router};

/// Wire the Trading Economics connector into a `Comparator` per `cfg`.
///
/// # Errors
/// Returns `Config` when the connector or the comparator rejects the settings.
pub fn comparator_from_config(cfg: &ServerConfig) -> Result<Comparator, CompareError> {
    let te = TeConnector::builder()
        .api_key(cfg.api_key.clone())
        .base_url(cfg.te_base_url.clone())
        .build()?;
    Comparator::builder()
        .with_connector(Arc::new(te))
        .config(cfg.comparator.clone())
        .build()
}

//! Application state for the HTTP server.

use std::sync::Arc;

use ecocomp::Comparator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Comparator shared immutably across requests.
    pub comparator: Arc<Comparator>,
}

impl AppState {
    /// Create a new application state around a built comparator.
    pub fn new(comparator: Comparator) -> Self {
        Self {
            comparator: Arc::new(comparator),
        }
    }
}

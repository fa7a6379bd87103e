//! axum HTTP layer.
//!
//! ```text
//! GET /         liveness text
//! GET /health   JSON status and crate version
//! GET /compare  ?country1&country2&indicator1&indicator2
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;

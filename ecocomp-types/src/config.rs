//! Configuration types shared by the comparator and its front ends.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::country::AllowList;

/// How the two series of a comparison are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Issue both fetches together and join them.
    #[default]
    Concurrent,
    /// Fetch the first country's series, then the second.
    Sequential,
}

impl std::str::FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" | "parallel" => Ok(Self::Concurrent),
            "sequential" | "serial" => Ok(Self::Sequential),
            other => Err(format!(
                "unknown fetch mode {other:?} (expected \"concurrent\" or \"sequential\")"
            )),
        }
    }
}

/// Configuration for the `Comparator` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Countries a comparison may reference.
    pub allowed_countries: AllowList,
    /// Whether the two fetches run concurrently or one after the other.
    pub fetch_mode: FetchMode,
    /// Fixed pause inserted before each provider fetch.
    ///
    /// Free-tier provider keys throttle bursts; a one second delay with
    /// `FetchMode::Sequential` keeps two back-to-back calls under that limit.
    pub fetch_delay: Duration,
    /// Timeout for each individual provider fetch.
    pub provider_timeout: Duration,
    /// Optional deadline for the whole comparison, delays included.
    pub request_timeout: Option<Duration>,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            allowed_countries: AllowList::default(),
            fetch_mode: FetchMode::default(),
            fetch_delay: Duration::ZERO,
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

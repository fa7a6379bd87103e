use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use ecocomp::{AllowList, ComparatorConfig, CompareError, FetchMode};

/// Default provider endpoint.
pub const DEFAULT_TE_BASE_URL: &str = "https://api.tradingeconomics.com";

/// Everything the server binary needs, read from the environment.
#[derive(Clone)]
pub struct ServerConfig {
    /// Provider API key. Opaque; never logged.
    pub api_key: String,
    /// Bind host: an IP literal or a name resolved at startup (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// Provider base URL (`TE_BASE_URL`).
    pub te_base_url: String,
    /// Comparator settings (allow-list, fetch mode, delays, timeouts).
    pub comparator: ComparatorConfig,
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("te_base_url", &self.te_base_url)
            .field("comparator", &self.comparator)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    /// Loads `.env` file if present, then reads required vars.
    pub fn from_env() -> Result<Self, CompareError> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompareError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_owned());

        let api_key = var("API_KEY")
            .ok_or_else(|| CompareError::Config("API_KEY is required but not set".to_string()))?;

        let allowed_countries = var("ALLOWED_COUNTRIES")
            .map_or_else(AllowList::default, |csv| AllowList::new(csv.split(',')));
        if allowed_countries.is_empty() {
            return Err(CompareError::Config(
                "ALLOWED_COUNTRIES contains no country names".to_string(),
            ));
        }

        let fetch_mode: FetchMode = var_or("FETCH_MODE", "concurrent")
            .parse()
            .map_err(|e| CompareError::Config(format!("invalid FETCH_MODE: {e}")))?;

        let comparator = ComparatorConfig {
            allowed_countries,
            fetch_mode,
            fetch_delay: Duration::from_millis(parse_num("FETCH_DELAY_MS", &var_or("FETCH_DELAY_MS", "0"))?),
            provider_timeout: Duration::from_secs(parse_num(
                "PROVIDER_TIMEOUT_SECS",
                &var_or("PROVIDER_TIMEOUT_SECS", "10"),
            )?),
            request_timeout: var("REQUEST_TIMEOUT_SECS")
                .map(|v| parse_num("REQUEST_TIMEOUT_SECS", &v).map(Duration::from_secs))
                .transpose()?,
        };

        Ok(Self {
            api_key,
            host: var_or("HOST", "0.0.0.0"),
            port: var_or("PORT", "5000")
                .trim()
                .parse()
                .map_err(|e| CompareError::Config(format!("invalid PORT: {e}")))?,
            te_base_url: var_or("TE_BASE_URL", DEFAULT_TE_BASE_URL),
            comparator,
        })
    }

    /// `host:port`, with IPv6 literals bracketed.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Resolve [`bind_addr`](Self::bind_addr) to a socket address.
    ///
    /// Host names such as `localhost` go through the system resolver; the
    /// first address returned is used.
    ///
    /// # Errors
    /// Returns `Config` when the host cannot be resolved.
    pub async fn resolve_bind_addr(&self) -> Result<SocketAddr, CompareError> {
        let addr = self.bind_addr();
        tokio::net::lookup_host(addr.as_str())
            .await
            .map_err(|e| CompareError::Config(format!("invalid HOST {addr}: {e}")))?
            .next()
            .ok_or_else(|| CompareError::Config(format!("HOST {addr} resolved to no address")))
    }
}

fn parse_num(key: &str, raw: &str) -> Result<u64, CompareError> {
    raw.trim()
        .parse()
        .map_err(|e| CompareError::Config(format!("invalid {key}: {e}")))
}

//! ecocomp HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! API_KEY=guest:guest cargo run -p ecocomp-server
//! ```
//!
//! # Environment Variables
//!
//! - `API_KEY`: provider key (required)
//! - `HOST` / `PORT`: bind address (default: 0.0.0.0:5000); `HOST` may be an
//!   IP literal or a resolvable name such as `localhost`
//! - `TE_BASE_URL`: provider base URL
//! - `ALLOWED_COUNTRIES`: comma-separated allow-list
//! - `FETCH_MODE`, `FETCH_DELAY_MS`, `PROVIDER_TIMEOUT_SECS`, `REQUEST_TIMEOUT_SECS`
//! - `RUST_LOG` / `LOG_LEVEL`: log filter (default: info)

use anyhow::Context;
use tracing::info;

use ecocomp_server::{
    AppState, ServerConfig, comparator_from_config, create_router, shutdown, tracing_init,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ServerConfig::from_env().context("loading configuration")?;
    tracing_init::init_tracing("info");

    info!(
        allowed = ?cfg.comparator.allowed_countries.entries(),
        fetch_mode = ?cfg.comparator.fetch_mode,
        "starting ecocomp server"
    );

    let comparator = comparator_from_config(&cfg).context("building comparator")?;
    let app = create_router(AppState::new(comparator));

    let addr = cfg
        .resolve_bind_addr()
        .await
        .context("resolving bind address")?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for(tokio::signal::ctrl_c()))
        .await?;
    Ok(())
}

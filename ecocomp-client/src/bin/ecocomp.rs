//! ecocomp CLI
//!
//! ```bash
//! ecocomp --country1 Sweden --country2 Thailand --indicator2 GDP --chart out.svg
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ecocomp_client::cli::{Cli, Outcome, execute};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Best-effort .env load; ignore if missing
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_env("RUST_LOG")
        .or_else(|_| EnvFilter::try_from_env("LOG_LEVEL"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match execute(&cli).await? {
        Outcome::Rendered(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Failed(msg) => {
            eprintln!("{msg}");
            Ok(ExitCode::FAILURE)
        }
    }
}

//! Command-line interface for the `ecocomp` binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ecocomp_core::KNOWN_INDICATORS;

use crate::client::{ComparisonClient, Selection};
use crate::render::{DEFAULT_TABLE_ROWS, comparison_table, render_svg};

/// Compare two economic indicators between two countries.
#[derive(Debug, Parser)]
#[command(name = "ecocomp")]
#[command(version)]
pub struct Cli {
    /// First country
    #[arg(long, default_value = "Sweden")]
    pub country1: String,

    /// Second country
    #[arg(long, default_value = "Mexico")]
    pub country2: String,

    /// Indicator for the first country
    #[arg(long, default_value = "GDP")]
    pub indicator1: String,

    /// Indicator for the second country
    #[arg(long, default_value = "Inflation Rate")]
    pub indicator2: String,

    /// Base URL of the comparison service
    #[arg(long, env = "ECOCOMP_SERVER_URL", default_value = "http://localhost:5000")]
    pub server: String,

    /// Number of table rows to print
    #[arg(long, default_value_t = DEFAULT_TABLE_ROWS)]
    pub rows: usize,

    /// Also write an SVG line chart to this path
    #[arg(long, value_name = "FILE")]
    pub chart: Option<PathBuf>,

    /// Print the merged rows as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print the indicators offered by default and exit
    #[arg(long)]
    pub list_indicators: bool,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        Selection {
            country1: self.country1.clone(),
            country2: self.country2.clone(),
            indicator1: self.indicator1.clone(),
            indicator2: self.indicator2.clone(),
        }
    }
}

/// What a run produced, before it is printed.
#[derive(Debug)]
pub enum Outcome {
    /// Table or JSON text for stdout.
    Rendered(String),
    /// The one-line error shown to the user.
    Failed(String),
}

/// Fetch the comparison and render it per the flags.
///
/// Service failures become [`Outcome::Failed`] with the user-facing message;
/// only local problems (bad URL, unwritable chart path) are errors.
pub async fn execute(args: &Cli) -> anyhow::Result<Outcome> {
    if args.list_indicators {
        return Ok(Outcome::Rendered(KNOWN_INDICATORS.join("\n")));
    }

    let client = ComparisonClient::new(&args.server)
        .with_context(|| format!("configuring client for {}", args.server))?;

    let merged = match client.fetch_comparison(&args.selection()).await {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!(error = %e, "comparison failed");
            return Ok(Outcome::Failed(e.user_message()));
        }
    };

    if let Some(path) = &args.chart {
        match render_svg(&merged, 1024, 512) {
            Ok(svg) => std::fs::write(path, svg)
                .with_context(|| format!("writing chart to {}", path.display()))?,
            Err(e) => tracing::warn!(error = %e, "chart not written"),
        }
    }

    let text = if args.json {
        serde_json::to_string_pretty(&merged)?
    } else {
        comparison_table(&merged, args.rows)
    };
    Ok(Outcome::Rendered(text))
}

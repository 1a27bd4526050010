use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use totalscraper::{config::Config, fetch::HttpTableSource, pipeline};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(config.log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();
    info!(base = %config.base_url(), output = %config.output.display(), "startup");

    // ─── 2) scrape every week and round, then write ─────────────────
    let start = Instant::now();
    let source = HttpTableSource::from_config(&config)?;
    let summary = pipeline::run(&source, &config.output)?;

    if !summary.unrecognised_codes.is_empty() {
        info!(codes = ?summary.unrecognised_codes, "unrecognised team codes kept as-is");
    }
    info!(rows = summary.rows, elapsed = ?start.elapsed(), "all done");
    Ok(())
}

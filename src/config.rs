// src/config.rs

use clap::Parser;
use std::{path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://thefootballlines.com/nfl-over-under/";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Backfill NFL over/under lines (2007-2019, regular season and playoffs) into one CSV"
)]
pub struct Config {
    /// Directory holding the per-week pages.
    #[arg(long, env = "TOTALS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,

    /// Output CSV path.
    #[arg(short, long, env = "TOTALS_OUTPUT", default_value = "opening_totals.csv")]
    pub output: PathBuf,

    /// Per-request timeout.
    #[arg(long, env = "TOTALS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Extra tracing directive, e.g. `debug` or `totalscraper=trace`.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Base URL with a trailing `/`, so page segments join beneath it.
    pub fn base_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

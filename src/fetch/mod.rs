// src/fetch/mod.rs
pub mod tables;

pub use tables::parse_tables;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::{calendar::WeekSpec, config::Config, process::RawTable};

/// Anything that can produce the season tables of one target page.
///
/// The returned index is the season position on the page.
pub trait TableSource {
    fn fetch_tables(&self, target: &WeekSpec) -> Result<Vec<RawTable>>;
}

/// Fetches pages from the odds site over blocking HTTP.
pub struct HttpTableSource {
    client: Client,
    base: Url,
}

impl HttpTableSource {
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client, base })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url(), config.timeout())
    }

    /// Page URL for `target`, e.g. `<base>/week-3` or `<base>/wildcard`.
    pub fn target_url(&self, target: &WeekSpec) -> Result<Url> {
        self.base
            .join(&target.segment())
            .with_context(|| format!("joining {} onto {}", target, self.base))
    }

    fn get_text(&self, url: &Url) -> Result<String> {
        debug!("Fetching text from {}", url);
        self.client
            .get(url.clone())
            .send()
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", url))?
            .text()
            .with_context(|| format!("Reading text from {}", url))
    }
}

impl TableSource for HttpTableSource {
    #[instrument(level = "info", skip(self), fields(target = %target))]
    fn fetch_tables(&self, target: &WeekSpec) -> Result<Vec<RawTable>> {
        let url = self.target_url(target)?;
        let body = self.get_text(&url)?;
        let tables = parse_tables(&body);
        debug!(%url, tables = tables.len(), "parsed page");
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Round;

    fn source(base: &str) -> HttpTableSource {
        HttpTableSource::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_target_urls() {
        let s = source("https://thefootballlines.com/nfl-over-under/");
        assert_eq!(
            s.target_url(&WeekSpec::Regular(3)).unwrap().as_str(),
            "https://thefootballlines.com/nfl-over-under/week-3"
        );
        assert_eq!(
            s.target_url(&WeekSpec::Postseason(Round::Wildcard))
                .unwrap()
                .as_str(),
            "https://thefootballlines.com/nfl-over-under/wildcard"
        );
    }

    #[test]
    fn test_unreachable_host_is_an_error() {
        let s = source("http://127.0.0.1:9/nfl-over-under/");
        let err = s.fetch_tables(&WeekSpec::Regular(1)).unwrap_err();
        assert!(format!("{:#}", err).contains("week-1"));
    }
}

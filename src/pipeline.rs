// src/pipeline.rs

use anyhow::{Context, Result};
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};
use tracing::{debug, info, instrument, warn};

use crate::{
    calendar::{season_for_position, WeekSpec},
    fetch::TableSource,
    process::{annotate_table, RawTable},
    schema::{rename_columns, write_records, OddsRecord},
    teams::is_canonical_code,
};

/// What one full backfill produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages: usize,
    pub tables: usize,
    pub rows: usize,
    /// Team codes that passed through normalization without being recognised.
    pub unrecognised_codes: BTreeSet<String>,
    pub output: Option<PathBuf>,
}

/// Scrape every target and return the renamed rows, in scrape order.
///
/// Nothing is written; any fetch, mapping or descriptor error aborts the run.
pub fn collect_records<S: TableSource + ?Sized>(
    source: &S,
) -> Result<(Vec<OddsRecord>, ScrapeSummary)> {
    let mut summary = ScrapeSummary::default();
    let mut annotated: Vec<RawTable> = Vec::new();

    for target in WeekSpec::all() {
        let tables = scrape_target(source, &target, &mut summary)?;
        annotated.extend(tables);
    }

    let records = rename_columns(&annotated);
    summary.rows = records.len();

    for code in &summary.unrecognised_codes {
        warn!(code = %code, "team code passed through unmapped; check the normalization table");
    }
    Ok((records, summary))
}

#[instrument(level = "info", skip(source, summary), fields(target = %target))]
fn scrape_target<S: TableSource + ?Sized>(
    source: &S,
    target: &WeekSpec,
    summary: &mut ScrapeSummary,
) -> Result<Vec<RawTable>> {
    let mut tables = source
        .fetch_tables(target)
        .with_context(|| format!("fetching {}", target))?;
    summary.pages += 1;

    let week = target.week();
    for (position, table) in tables.iter_mut().enumerate() {
        let season = season_for_position(position)
            .with_context(|| format!("{}: {} tables on page", target, position + 1))?;
        let ids = annotate_table(table, season, week)
            .with_context(|| format!("{} season {} (position {})", target, season, position))?;
        debug!(season, week, rows = ids.len(), "annotated table");

        summary.unrecognised_codes.extend(
            ids.iter()
                .flat_map(|id| id.teams())
                .filter(|code| !is_canonical_code(code))
                .map(str::to_string),
        );
    }

    summary.tables += tables.len();
    info!(tables = tables.len(), "scraped");
    Ok(tables)
}

/// Run the full backfill and write the result to `output`.
///
/// The file is only touched once every target has been scraped.
pub fn run<S: TableSource + ?Sized>(source: &S, output: &Path) -> Result<ScrapeSummary> {
    let (records, mut summary) = collect_records(source)?;
    write_records(output, &records)
        .with_context(|| format!("writing {}", output.display()))?;
    summary.output = Some(output.to_path_buf());

    info!(
        pages = summary.pages,
        tables = summary.tables,
        rows = summary.rows,
        output = %output.display(),
        "backfill complete"
    );
    Ok(summary)
}

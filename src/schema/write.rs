use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use super::OddsRecord;

/// Write `records` as CSV to `path`, replacing any existing file.
///
/// - one header row with [`OddsRecord::COLUMNS`], then one row per record
/// - no index column
/// - written to a hidden temp file beside `path`, then renamed over it
pub fn write_records<P: AsRef<Path>>(path: P, records: &[OddsRecord]) -> Result<()> {
    // 1) Make sure the destination directory exists
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).with_context(|| format!("creating {:?}", dir))?;

    // 2) Write everything to ".<name>.tmp"
    let file_name = path
        .file_name()
        .with_context(|| format!("output path {:?} has no file name", path))?
        .to_string_lossy();
    let tmp_path = dir.join(format!(".{}.tmp", file_name));

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp_path)
        .with_context(|| format!("creating {:?}", tmp_path))?;
    writer
        .write_record(OddsRecord::COLUMNS)
        .context("writing header row")?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("writing row {}", record.game_id))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {:?}", tmp_path))?;
    drop(writer);

    // 3) Swap it into place
    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    debug!(path = %path.display(), rows = records.len(), "wrote records");

    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};

use super::model::Dataset;

/// Create the directory that will hold `path`, if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display())),
        _ => Ok(()),
    }
}

/// Write `dataset` as CSV: one header row, then every record.  No index column.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;
    writer
        .write_record(dataset.columns())
        .context("writing CSV header")?;
    for (row_no, record) in dataset.rows().iter().enumerate() {
        writer
            .write_record(record)
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing CSV {}", path.display()))?;

    log::debug!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

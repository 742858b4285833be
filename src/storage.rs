// =============================================================================
// Report Storage — durable JSON sink with atomic save
// =============================================================================
//
// Writes reports as pretty-printed JSON using a tmp + rename pattern so a
// crash mid-write never leaves a truncated file behind. A failed write is an
// error for the caller to log; the in-memory report is unaffected.
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::report::Report;
use crate::scenarios::CombinedReport;

/// Serialise `value` to pretty JSON and write it atomically to `path`
/// (write to a `.tmp` sibling, then rename).
fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("failed to serialise to JSON")?;

    let tmp_path = path.with_extension("json.tmp");

    std::fs::write(&tmp_path, &content)
        .with_context(|| format!("failed to write tmp file {}", tmp_path.display()))?;

    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to rename tmp file to {}", path.display()))?;

    Ok(())
}

/// Persist a single analysis report.
pub fn save_report(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    save_json(report, path)?;
    info!(path = %path.display(), "report saved (atomic)");
    Ok(())
}

/// Persist the combined document of a batch run.
pub fn save_combined(combined: &CombinedReport, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    save_json(combined, path)?;
    info!(
        path = %path.display(),
        scenarios = combined.analysis_summary.total_scenarios,
        "combined report saved (atomic)"
    );
    Ok(())
}

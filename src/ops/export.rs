//! Export the latest summary as a PDF report.

use crate::constants::REPORT_FILE_NAME;
use crate::errors::{AppResult, ExportError};
use crate::report::render_pdf;
use crate::session::SessionState;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolves where a report goes: an explicit path, or the standard file
/// name inside `export_dir`.
pub fn report_path(export_dir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => export_dir.join(REPORT_FILE_NAME),
    }
}

/// Writes the session's latest summary as a PDF to `destination`.
///
/// Export never changes the session; a failed export can simply be retried.
///
/// # Errors
///
/// Returns an error if:
/// - No summary has been generated yet
/// - The PDF cannot be rendered
/// - The file cannot be written
pub fn export_report(session: &SessionState, destination: &Path) -> AppResult<PathBuf> {
    let summary = session
        .last_summary
        .as_deref()
        .ok_or(ExportError::NoSummary)?;

    let bytes = render_pdf(summary)?;
    fs::write(destination, &bytes).map_err(|source| ExportError::Write {
        path: destination.to_path_buf(),
        source,
    })?;

    info!("Exported report ({} bytes)", bytes.len());
    Ok(destination.to_path_buf())
}

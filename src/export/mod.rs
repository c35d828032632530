//! Quotation exports: the printable PDF document plus JSON and CSV data.
//!
//! Every export renders fully in memory before touching the disk, then writes
//! through a `.part` file that is renamed into place, so a failed export never
//! leaves a truncated file behind.

pub mod canvas;
pub mod csv;
pub mod details;
pub mod format;
pub mod json;
pub mod layout;
pub mod pdf;

pub use crate::error::ExportError;
pub use canvas::Canvas;
pub use self::csv::{export_csv, render_csv};
pub use details::{cost_breakdown, work_details, CostLine, WorkSection};
pub use format::{export_file_name, format_total, group_amount};
pub use json::{export_json, render_json};
pub use layout::render_document;
pub use pdf::{render_pdf, PdfCanvas};

use crate::config::Config;
use crate::model::QuoteSnapshot;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Render `snapshot` in `format` and write it into `out_dir` under a name
/// derived from the client and `millis`. Returns the written path.
pub fn export_quotation(
    snapshot: &QuoteSnapshot,
    config: &Config,
    format: ExportFormat,
    out_dir: &Path,
    millis: i64,
) -> Result<PathBuf, ExportError> {
    if !snapshot.total_cost.is_finite() {
        return Err(ExportError::Render {
            message: format!("total cost {} is not a finite amount", snapshot.total_cost),
        });
    }

    let bytes = match format {
        ExportFormat::Pdf => render_pdf(snapshot, config)?,
        ExportFormat::Json => render_json(snapshot)?,
        ExportFormat::Csv => render_csv(snapshot)?,
    };

    let name = export_file_name(
        &config.document.file_prefix,
        &snapshot.quotation.client.client_name,
        millis,
        format.extension(),
    );
    let path = out_dir.join(name);
    write_atomic(&path, &bytes)?;

    tracing::info!(
        path = %path.display(),
        format = format.extension(),
        bytes = bytes.len(),
        total = snapshot.total_cost,
        "quotation exported"
    );
    Ok(path)
}

/// Write `bytes` to `path` via a temporary sibling file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut part = path.as_os_str().to_owned();
    part.push(".part");
    let part = PathBuf::from(part);

    let result = write_file(&part, bytes).and_then(|()| {
        std::fs::rename(&part, path).map_err(|e| ExportError::WriteError {
            message: format!("failed to move '{}' into place: {e}", part.display()),
        })
    });

    if result.is_err() {
        // Best effort: the part file may not exist yet
        let _ = std::fs::remove_file(&part);
    }
    result
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let mut file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })
}

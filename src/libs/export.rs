//! Report export to files.
//!
//! ## Formats
//!
//! - **JSON**: pretty-printed snapshot of the daily series, plus hotel info
//!   and reservations in detailed mode
//! - **PDF**: title block, summary table and charts, rendered by [`super::pdf`]
//!
//! Every file is written to a temporary sibling first and renamed into place
//! once complete, so a failed export never leaves a partial file behind.
//!
//! ```rust,no_run
//! use dailyrep::libs::config::Palette;
//! use dailyrep::libs::export::{ExportFormat, Exporter};
//! # fn demo(report: &dailyrep::libs::report::Report) -> dailyrep::libs::error::Result<()> {
//! Exporter::new(ExportFormat::Json, "report.json").export(report, &Palette::default())?;
//! # Ok(())
//! # }
//! ```

use super::config::Palette;
use super::error::Result;
use super::pdf::PdfRenderer;
use super::report::Report;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Pdf,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Pdf => "PDF",
        }
    }
}

/// Writes a [`Report`] to a single file in one format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            output_path: output_path.into(),
        }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the report. The palette is only read by the PDF format.
    pub fn export(&self, report: &Report, palette: &Palette) -> Result<()> {
        match self.format {
            ExportFormat::Json => write_atomic(&self.output_path, |writer| {
                serde_json::to_writer_pretty(&mut *writer, report)?;
                writer.write_all(b"\n")?;
                Ok(())
            }),
            ExportFormat::Pdf => {
                let renderer = PdfRenderer::new(report, palette);
                write_atomic(&self.output_path, |writer| renderer.render(writer))
            }
        }
    }
}

/// Serializes the report exactly as the JSON export does.
pub fn to_json_string(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Runs `write` against a temporary file next to `path`, then renames it over `path`.
pub fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut NamedTempFile>) -> Result<()>,
{
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let mut temp = NamedTempFile::new_in(&parent)?;
    {
        let mut writer = BufWriter::new(&mut temp);
        write(&mut writer)?;
        writer.flush()?;
    }
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

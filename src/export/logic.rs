// src/export/logic.rs

use crate::config::Config;
use crate::core::calculator::summary::summarize;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, prepare_output};
use crate::export::json_csv::{export_csv_file, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::RecordSet;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// Report title used by the PDF export.
pub const REPORT_TITLE: &str = "DID - Monthly Records";

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the ledger to `file` (or the configured default file name).
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: output path, `~/` expanded; when omitted the configured
    ///   `export_file` is used with its extension matching `format`
    /// - `force`: overwrite without asking
    ///
    /// Negative values never block an export, they are only mentioned.
    pub fn export(
        records: &RecordSet,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        cfg: &Config,
    ) -> AppResult<PathBuf> {
        let path = Self::target_path(format, file, cfg)?;

        ensure_writable(&path, force)?;

        if records.is_empty() {
            warning("The ledger has no rows: exporting the header only.");
        }

        let summary = summarize(records);

        match format {
            ExportFormat::Csv => export_csv_file(records, &path)?,
            ExportFormat::Json => export_json(records, &summary, &path)?,
            ExportFormat::Xlsx => export_xlsx(records, &summary, &path)?,
            ExportFormat::Pdf => export_pdf(records, &summary, &path, REPORT_TITLE, cfg.decimals)?,
        }

        log::info!(
            "exported {} rows as {} to {}",
            records.len(),
            format.as_str(),
            path.display()
        );
        Ok(path)
    }

    /// Output path for an export: `file` with `~/` expanded, or the configured
    /// `export_file` with the format's extension. Creates the parent directory.
    pub fn target_path(format: ExportFormat, file: Option<&str>, cfg: &Config) -> AppResult<PathBuf> {
        let target = match file {
            Some(f) => f.to_string(),
            None => default_file_name(&cfg.export_file, format),
        };
        prepare_output(&target)
    }
}

/// Swap the extension of the configured file name for the chosen format.
fn default_file_name(configured: &str, format: ExportFormat) -> String {
    Path::new(configured)
        .with_extension(format.as_str())
        .to_string_lossy()
        .to_string()
}

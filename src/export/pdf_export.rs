// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, records_to_table};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::{Field, RecordSet, Summary};
use crate::ui::messages::info;
use crate::utils::formatting::format_amount;
use std::path::Path;

/// Export a printable monthly report: the grid plus the summary block.
pub(crate) fn export_pdf(
    records: &RecordSet,
    summary: &Summary,
    path: &Path,
    title: &str,
    decimals: usize,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let right_align: Vec<bool> = Field::ALL.iter().map(Field::is_numeric).collect();
    let rows = records_to_table(records);

    let subtitle = format!(
        "{} rows | generated {}",
        records.len(),
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    let summary_lines = vec![
        (
            "Total KM".to_string(),
            format_amount(summary.total_distance, decimals),
        ),
        (
            "Working Payment".to_string(),
            format_amount(summary.total_working, decimals),
        ),
        (
            "Extra Payment".to_string(),
            format_amount(summary.total_extra, decimals),
        ),
        (
            "Total Payment".to_string(),
            format_amount(summary.total_payment, decimals),
        ),
    ];

    let mut pdf = PdfManager::new();
    pdf.write_report(
        title,
        &subtitle,
        &headers,
        &right_align,
        &rows,
        &summary_lines,
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

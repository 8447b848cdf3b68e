// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::csv_text::export_csv;
use crate::export::model::records_to_export;
use crate::export::notify_export_success;
use crate::models::{RecordSet, Summary};
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct JsonDocument<'a> {
    records: Vec<crate::export::RecordExport>,
    summary: &'a Summary,
}

/// Export JSON pretty-printed: the rows plus the summary block.
pub(crate) fn export_json(records: &RecordSet, summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = JsonDocument {
        records: records_to_export(records),
        summary,
    };
    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, same bytes as the in-memory export.
pub(crate) fn export_csv_file(records: &RecordSet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let text = export_csv(records)?;
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;

    notify_export_success("CSV", path);
    Ok(())
}

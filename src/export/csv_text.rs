// src/export/csv_text.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::models::RecordSet;
use csv::{Terminator, WriterBuilder};
use std::io;

/// Serialize the ledger to CSV text: one header line, then one line per row
/// in ledger order. Nothing is filtered out.
pub fn export_csv(records: &RecordSet) -> AppResult<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record(get_headers())?;

    for row in records {
        wtr.write_record(row.to_row())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

// src/export/model.rs

use crate::models::{CellValue, DayRecord, Field, RecordSet};
use serde::Serialize;

/// Flat row for JSON export, keyed by the visible column names.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "Date")]
    pub date: u32,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "KM")]
    pub km: CellValue,
    #[serde(rename = "Working Payment")]
    pub working_payment: CellValue,
    #[serde(rename = "Extra Payment")]
    pub extra_payment: CellValue,
    #[serde(rename = "Total Payment")]
    pub total_payment: CellValue,
}

impl From<&DayRecord> for RecordExport {
    fn from(r: &DayRecord) -> Self {
        Self {
            date: r.day,
            city: r.location.clone(),
            km: r.distance.clone(),
            working_payment: r.working_payment.clone(),
            extra_payment: r.extra_payment.clone(),
            total_payment: r.total_payment.clone(),
        }
    }
}

/// Header for CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    Field::ALL.iter().map(Field::header).collect()
}

pub(crate) fn records_to_export(records: &RecordSet) -> Vec<RecordExport> {
    records.iter().map(RecordExport::from).collect()
}

/// Rows as string tables (for PDF).
pub(crate) fn records_to_table(records: &RecordSet) -> Vec<Vec<String>> {
    records.iter().map(DayRecord::to_row).collect()
}

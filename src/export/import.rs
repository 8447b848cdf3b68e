// src/export/import.rs

use crate::errors::{AppError, AppResult};
use crate::models::day_record::parse_day;
use crate::models::{CellValue, DayRecord, Field, RecordSet};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs;
use std::path::Path;

/// Parse CSV text in the export layout back into a ledger.
///
/// Columns are matched by header name (case-insensitive, any order). `Date`
/// is required; missing columns default to empty/zero. Numeric cells keep
/// malformed text until the next recompute.
pub fn import_csv(text: &str) -> AppResult<RecordSet> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let columns = locate_columns(&headers)?;

    let mut records = RecordSet::default();

    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map_or(0, |p| p.line());

        if rec.iter().all(|f| f.trim().is_empty()) {
            continue;
        }

        records.push(parse_row(&rec, &columns, line)?);
    }

    log::debug!("imported {} rows", records.len());
    Ok(records)
}

/// Read and import a CSV file from disk.
pub fn load_file(path: &Path) -> AppResult<RecordSet> {
    let text = fs::read_to_string(path)?;
    // Spreadsheet tools like to prepend a BOM.
    import_csv(text.trim_start_matches('\u{feff}'))
}

/// Index of each known column in the header, in `Field::ALL` order.
fn locate_columns(headers: &StringRecord) -> AppResult<[Option<usize>; 6]> {
    let mut columns = [None; 6];

    for (idx, name) in headers.iter().enumerate() {
        if let Some(field) = Field::from_name(name) {
            columns[field as usize].get_or_insert(idx);
        }
    }

    if columns[0].is_none() {
        return Err(AppError::Import {
            line: 1,
            msg: "missing required column 'Date'".into(),
        });
    }
    Ok(columns)
}

fn parse_row(rec: &StringRecord, columns: &[Option<usize>; 6], line: u64) -> AppResult<DayRecord> {
    let field = |slot: usize| cell(rec, columns, slot);

    let raw_day = field(0);
    let day = parse_day(raw_day).map_err(|_| AppError::Import {
        line,
        msg: format!("invalid Date '{raw_day}'"),
    })?;

    let numeric = |slot: usize| match columns[slot] {
        Some(_) => CellValue::from_input(field(slot)),
        None => CellValue::default(),
    };

    Ok(DayRecord {
        day,
        location: field(1).to_string(),
        distance: numeric(2),
        working_payment: numeric(3),
        extra_payment: numeric(4),
        total_payment: numeric(5),
    })
}

fn cell<'a>(rec: &'a StringRecord, columns: &[Option<usize>; 6], slot: usize) -> &'a str {
    columns[slot]
        .and_then(|idx| rec.get(idx))
        .unwrap_or_default()
}

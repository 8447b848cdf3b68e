//! Record store operations: default data, clear, and grid edits.

use crate::errors::AppResult;
use crate::models::{DayRecord, Field, RecordSet};

/// Days in the default month grid.
pub const DEFAULT_DAYS: u32 = 31;

/// A single change coming from the editing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum RowEdit {
    /// Set one field of the row at position `row` from raw input.
    Set {
        row: usize,
        field: Field,
        value: String,
    },
    /// Insert a row at `at`, or append when `at` is `None`.
    Insert {
        at: Option<usize>,
        record: DayRecord,
    },
    Remove {
        row: usize,
    },
    /// Replace every row (full grid hand-back).
    Replace(RecordSet),
}

/// Fresh ledger: `days` rows numbered from 1, every value empty or zero.
pub fn initialize(days: u32) -> RecordSet {
    (1..=days).map(DayRecord::blank).collect()
}

/// Blank every City and zero every numeric column, keeping rows and days.
pub fn clear_values(records: &mut RecordSet) {
    for row in records.rows_mut() {
        let day = row.day;
        *row = DayRecord::blank(day);
    }
    log::debug!("cleared values on {} rows", records.len());
}

/// Apply a batch of edits in order.
///
/// The batch is all-or-nothing: when an edit fails (row out of range,
/// invalid Date) `records` is left exactly as it was.
pub fn apply_edits(records: &mut RecordSet, edits: &[RowEdit]) -> AppResult<()> {
    let mut work = records.clone();

    for edit in edits {
        apply_one(&mut work, edit)?;
    }

    log::debug!("applied {} edits, {} rows now", edits.len(), work.len());
    *records = work;
    Ok(())
}

fn apply_one(records: &mut RecordSet, edit: &RowEdit) -> AppResult<()> {
    match edit {
        RowEdit::Set { row, field, value } => records.get_mut(*row)?.set(*field, value),
        RowEdit::Insert { at, record } => match at {
            Some(idx) => records.insert(*idx, record.clone()),
            None => {
                records.push(record.clone());
                Ok(())
            }
        },
        RowEdit::Remove { row } => records.remove(*row).map(|_| ()),
        RowEdit::Replace(set) => {
            *records = set.clone();
            Ok(())
        }
    }
}

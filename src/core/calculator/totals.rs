use crate::core::calculator::coerce::coerce_numeric;
use crate::models::{CellValue, DayRecord, RecordSet};

/// Outcome of an "update totals" action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeReport {
    pub rows: usize,
    /// Cells whose raw content could not be kept as a number.
    pub coerced: usize,
}

/// Coerce numeric columns, then rebuild `total_payment` on every row
/// (rows added past day 31 included).
pub fn recompute_totals(records: &mut RecordSet) -> RecomputeReport {
    let coerced = coerce_numeric(records);

    for row in records.rows_mut() {
        row.total_payment = CellValue::Number(row_total(row));
    }

    log::debug!(
        "recomputed totals on {} rows ({} cells coerced)",
        records.len(),
        coerced
    );

    RecomputeReport {
        rows: records.len(),
        coerced,
    }
}

/// Working plus extra payment, clamped to the finite `f64` range so an
/// overflowing sum still exports as a number.
fn row_total(row: &DayRecord) -> f64 {
    (row.working_payment.as_f64() + row.extra_payment.as_f64()).clamp(f64::MIN, f64::MAX)
}

/// True when `recompute_totals` would rewrite at least one cell.
pub fn needs_recompute(records: &RecordSet) -> bool {
    records.iter().any(|row| {
        !row.distance.is_coerced()
            || !row.working_payment.is_coerced()
            || !row.extra_payment.is_coerced()
            || row.total_payment != CellValue::Number(row_total(row))
    })
}

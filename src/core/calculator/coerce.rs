use crate::models::{CellValue, RecordSet};

/// Force a single cell to a clean number, 0 when it cannot be read.
/// Returns true when the stored value had to change.
pub fn coerce_cell(cell: &mut CellValue) -> bool {
    if cell.is_coerced() {
        return false;
    }
    *cell = CellValue::Number(cell.as_f64());
    true
}

/// Coerce KM, working and extra payment on every row.
///
/// Each cell is handled on its own: a malformed entry only ever becomes 0
/// in its own cell. Returns the number of cells that were rewritten.
pub fn coerce_numeric(records: &mut RecordSet) -> usize {
    let mut changed = 0;
    for row in records.rows_mut() {
        for cell in [
            &mut row.distance,
            &mut row.working_payment,
            &mut row.extra_payment,
        ] {
            if coerce_cell(cell) {
                changed += 1;
            }
        }
    }
    changed
}

use crate::errors::{AppError, AppResult};
use crate::models::cell::CellValue;
use crate::models::field::Field;
use serde::{Deserialize, Serialize};

/// One ledger row: a single calendar day's entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Display field only; rows are identified by position.
    pub day: u32,
    pub location: String,
    pub distance: CellValue,
    pub working_payment: CellValue,
    pub extra_payment: CellValue,
    pub total_payment: CellValue,
}

impl DayRecord {
    /// Empty row for the given day: no city, every number at zero.
    pub fn blank(day: u32) -> Self {
        Self {
            day,
            location: String::new(),
            distance: CellValue::default(),
            working_payment: CellValue::default(),
            extra_payment: CellValue::default(),
            total_payment: CellValue::default(),
        }
    }

    /// Numeric cell behind a field, `None` for Date and City.
    pub fn cell(&self, field: Field) -> Option<&CellValue> {
        match field {
            Field::Km => Some(&self.distance),
            Field::WorkingPayment => Some(&self.working_payment),
            Field::ExtraPayment => Some(&self.extra_payment),
            Field::TotalPayment => Some(&self.total_payment),
            Field::Date | Field::City => None,
        }
    }

    fn cell_mut(&mut self, field: Field) -> Option<&mut CellValue> {
        match field {
            Field::Km => Some(&mut self.distance),
            Field::WorkingPayment => Some(&mut self.working_payment),
            Field::ExtraPayment => Some(&mut self.extra_payment),
            Field::TotalPayment => Some(&mut self.total_payment),
            Field::Date | Field::City => None,
        }
    }

    /// Set a field from raw user input.
    ///
    /// Numeric fields accept anything (malformed text waits for the next
    /// recompute), Date must be an unsigned integer.
    pub fn set(&mut self, field: Field, raw: &str) -> AppResult<()> {
        match field {
            Field::Date => {
                self.day = parse_day(raw)?;
            }
            Field::City => {
                self.location = raw.to_string();
            }
            numeric => {
                if let Some(cell) = self.cell_mut(numeric) {
                    *cell = CellValue::from_input(raw);
                }
            }
        }
        Ok(())
    }

    /// Field rendered as text, in export form.
    pub fn value_string(&self, field: Field) -> String {
        match field {
            Field::Date => self.day.to_string(),
            Field::City => self.location.clone(),
            numeric => self
                .cell(numeric)
                .map(CellValue::to_export_string)
                .unwrap_or_default(),
        }
    }

    /// All six columns, in export order.
    pub fn to_row(&self) -> Vec<String> {
        Field::ALL.iter().map(|f| self.value_string(*f)).collect()
    }
}

/// Parse a Date cell. Accepts `7` and also `7.0` (grids often hand back
/// integral floats).
pub fn parse_day(raw: &str) -> AppResult<u32> {
    let t = raw.trim();
    if let Ok(d) = t.parse::<u32>() {
        return Ok(d);
    }
    match t.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Ok(f as u32)
        }
        _ => Err(AppError::InvalidDay(raw.to_string())),
    }
}

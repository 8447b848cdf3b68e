use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric grid cell.
///
/// Cells hold a number once coerced, but user input is accepted as-is until
/// the next recompute: anything that does not parse as a finite number is
/// kept verbatim in `Text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Number(0.0)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl CellValue {
    /// Build a cell from raw user input (grid edit, CLI argument, CSV field).
    pub fn from_input(raw: &str) -> Self {
        match parse_number(raw) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(raw.to_string()),
        }
    }

    /// Numeric reading of the cell, 0 when it cannot be read as a number.
    /// Never mutates the cell.
    pub fn as_f64(&self) -> f64 {
        self.try_f64().unwrap_or(0.0)
    }

    /// `Some` only when the cell holds (or parses to) a finite number.
    pub fn try_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Number(_) => None,
            CellValue::Text(s) => parse_number(s),
        }
    }

    /// True when the cell is already a clean, finite number.
    pub fn is_coerced(&self) -> bool {
        matches!(self, CellValue::Number(n) if n.is_finite())
    }

    /// Render the cell for export: integral numbers as `N.0`, other numbers
    /// in shortest round-trip form, text verbatim.
    pub fn to_export_string(&self) -> String {
        match self {
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_export_string())
    }
}

/// Parse a trimmed string as a finite `f64`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Locale-stable decimal rendering (`.` separator, no grouping).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

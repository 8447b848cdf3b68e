//! Formatting utilities used for CLI and export outputs.

use crate::models::CellValue;

/// Fixed-precision rendering for the grid and the summary (`1234.50`).
pub fn format_amount(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Amount with an optional currency suffix (`12.50 €`).
pub fn with_currency(amount: String, currency: &str) -> String {
    if currency.trim().is_empty() {
        amount
    } else {
        format!("{amount} {}", currency.trim())
    }
}

/// Grid rendering of a numeric cell. Raw text waiting for a recompute is
/// shown quoted so it stands out from real numbers.
pub fn format_cell(cell: &CellValue, decimals: usize) -> String {
    match cell {
        CellValue::Number(n) if n.is_finite() => format_amount(*n, decimals),
        CellValue::Number(n) => n.to_string(),
        CellValue::Text(s) => format!("{s:?}"),
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let visible = crate::utils::table::visible_width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(visible)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = crate::utils::table::visible_width(s);
    format!("{}{s}", " ".repeat(width.saturating_sub(visible)))
}

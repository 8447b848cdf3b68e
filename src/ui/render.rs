//! Terminal rendering of the grid, the summary and validation results.

use crate::config::Config;
use crate::core::validate::Problem;
use crate::models::{Field, RecordSet, Summary};
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{color_for_amount, color_for_label, paint};
use crate::utils::formatting::{format_amount, format_cell, with_currency};
use crate::utils::table::{Align, Column, Table};

/// Grid as a text table, with a leading row-position column (`#`) so rows
/// can be addressed even when days repeat.
pub fn render_grid(records: &RecordSet, cfg: &Config) -> String {
    let mut columns = vec![Column::new("#", Align::Right)];
    columns.extend(Field::ALL.iter().map(|f| {
        let align = if f.is_numeric() || *f == Field::Date {
            Align::Right
        } else {
            Align::Left
        };
        Column::new(f.header(), align)
    }));

    let separator = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(columns, separator);

    for (idx, r) in records.iter().enumerate() {
        let mut row = vec![(idx + 1).to_string(), r.day.to_string()];
        row.push(paint(
            if r.location.is_empty() { "-" } else { r.location.as_str() },
            color_for_label(&r.location),
        ));
        for field in [
            Field::Km,
            Field::WorkingPayment,
            Field::ExtraPayment,
            Field::TotalPayment,
        ] {
            let cell = r.cell(field).cloned().unwrap_or_default();
            let text = format_cell(&cell, cfg.decimals);
            row.push(paint(&text, color_for_amount(cell.as_f64())));
        }
        table.add_row(row);
    }

    table.render()
}

/// The four summary metrics, one per line.
pub fn render_summary(summary: &Summary, cfg: &Config) -> String {
    let money = |v: f64| with_currency(format_amount(v, cfg.decimals), &cfg.currency);
    let lines = [
        ("🚗 Total KM", format_amount(summary.total_distance, cfg.decimals)),
        ("💼 Working Payment", money(summary.total_working)),
        ("🎁 Extra Payment", money(summary.total_extra)),
        ("💰 Total Payment", money(summary.total_payment)),
    ];

    lines
        .iter()
        .map(|(label, value)| format!("{label:<20} {value}\n"))
        .collect()
}

pub fn print_grid(records: &RecordSet, cfg: &Config) {
    header("📋 Monthly Data Entry");
    print!("{}", render_grid(records, cfg));
}

pub fn print_summary(summary: &Summary, cfg: &Config) {
    header("📊 Summary");
    print!("{}", render_summary(summary, cfg));
}

/// Validation outcome: one warning per problem, or a success line.
pub fn print_problems(problems: &[Problem]) {
    if problems.is_empty() {
        success("All data looks valid!");
        return;
    }
    for p in problems {
        let rows: Vec<String> = p.rows.iter().map(|r| (r + 1).to_string()).collect();
        warning(format!("{} (rows: {})", p, rows.join(", ")));
    }
}

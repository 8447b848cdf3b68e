// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::{CellValue, Field, RecordSet, Summary};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows, a totals row and
/// auto-sized columns.
pub(crate) fn export_xlsx(records: &RecordSet, summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name("Monthly Records")
        .map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x0078D4))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, record) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, field) in Field::ALL.iter().enumerate() {
            let col = col as u16;
            let fmt = Format::new()
                .set_background_color(band)
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin);

            match *field {
                Field::Date => {
                    worksheet
                        .write_with_format(
                            row,
                            col,
                            f64::from(record.day),
                            &fmt.set_align(FormatAlign::Center),
                        )
                        .map_err(to_app_error)?;
                }
                Field::City if record.location.is_empty() => {
                    worksheet
                        .write_blank(row, col, &fmt)
                        .map_err(to_app_error)?;
                }
                Field::City => {
                    worksheet
                        .write_with_format(row, col, record.location.as_str(), &fmt)
                        .map_err(to_app_error)?;
                }
                numeric => {
                    let fmt = fmt.set_align(FormatAlign::Right).set_num_format("0.00");
                    match record.cell(numeric) {
                        Some(CellValue::Number(n)) if n.is_finite() => {
                            worksheet
                                .write_with_format(row, col, *n, &fmt)
                                .map_err(to_app_error)?;
                        }
                        Some(other) => {
                            worksheet
                                .write_with_format(row, col, other.to_export_string(), &fmt)
                                .map_err(to_app_error)?;
                        }
                        None => {}
                    }
                }
            }

            let w = UnicodeWidthStr::width(record.value_string(*field).as_str());
            col_widths[col as usize] = col_widths[col as usize].max(w);
        }
    }

    // ---------------------------
    // Totals row
    // ---------------------------
    let total_row = (records.len() + 1) as u32;
    let total_fmt = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xD9E1F2))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    let total_num_fmt = total_fmt
        .clone()
        .set_align(FormatAlign::Right)
        .set_num_format("0.00");

    worksheet
        .write_with_format(total_row, 0, "Total", &total_fmt)
        .map_err(to_app_error)?;
    worksheet
        .write_blank(total_row, 1, &total_fmt)
        .map_err(to_app_error)?;

    let sums = [
        summary.total_distance,
        summary.total_working,
        summary.total_extra,
        summary.total_payment,
    ];
    for (i, value) in sums.iter().enumerate() {
        worksheet
            .write_with_format(total_row, (i + 2) as u16, *value, &total_num_fmt)
            .map_err(to_app_error)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

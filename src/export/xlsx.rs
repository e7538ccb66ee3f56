// src/export/xlsx.rs

use crate::core::palette::Palette;
use crate::core::view::MatrixView;
use crate::errors::{AppError, AppResult};
use crate::export::model::{lead_cells, matrix_headers};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// The matrix on one sheet, load cells shaded with the palette.
pub(crate) fn export_xlsx(view: &MatrixView<'_>, palette: &Palette, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Plan de charge").map_err(xlsx_err)?;

    let headers = matrix_headers(view);
    let lead = 4u16;
    let total_col = lead + view.months.len() as u16;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(xlsx_err)?;
    }
    worksheet.set_freeze_panes(1, lead).map_err(xlsx_err)?;

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let text_format = Format::new().set_border(FormatBorder::Thin);
    let total_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);

    for (idx, row) in view.rows.iter().enumerate() {
        let xrow = (idx + 1) as u32;

        for (col, value) in lead_cells(view, idx).iter().enumerate() {
            worksheet
                .write_with_format(xrow, col as u16, value.as_str(), &text_format)
                .map_err(xlsx_err)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }

        for (i, month) in view.months.iter().enumerate() {
            let load = row.load_for(month);
            let (bg, fg) = palette.cell_colors(load);
            let fmt = Format::new()
                .set_background_color(Color::RGB(bg.to_u32()))
                .set_font_color(Color::RGB(fg.rgb().to_u32()))
                .set_pattern(FormatPattern::Solid)
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center);

            worksheet
                .write_with_format(xrow, lead + i as u16, load, &fmt)
                .map_err(xlsx_err)?;
        }

        worksheet
            .write_with_format(xrow, total_col, view.row_sum(row) as f64, &total_format)
            .map_err(xlsx_err)?;
    }

    // Column totals
    let sums_row = (view.rows.len() + 1) as u32;
    worksheet
        .write_with_format(sums_row, 0, "Total", &total_format)
        .map_err(xlsx_err)?;
    let sums = view.column_sums();
    for (i, sum) in sums.iter().enumerate() {
        worksheet
            .write_with_format(sums_row, lead + i as u16, *sum as f64, &total_format)
            .map_err(xlsx_err)?;
    }
    worksheet
        .write_with_format(
            sums_row,
            total_col,
            sums.iter().sum::<i64>() as f64,
            &total_format,
        )
        .map_err(xlsx_err)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn xlsx_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}

// src/export/pdf_export.rs

use crate::core::palette::Palette;
use crate::core::view::MatrixView;
use crate::errors::{AppError, AppResult};
use crate::export::model::{lead_cells, matrix_headers};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfCell, PdfManager};
use crate::ui::messages::info;
use crate::utils::formatting::truncate;
use std::path::Path;

const COMMENT_MAX: usize = 24;

fn matrix_cells(view: &MatrixView<'_>, palette: &Palette) -> Vec<Vec<PdfCell>> {
    let mut rows: Vec<Vec<PdfCell>> = view
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let [name, firstname, subject, comment] = lead_cells(view, idx);
            let mut cells = vec![
                PdfCell::plain(name),
                PdfCell::plain(firstname),
                PdfCell::plain(subject),
                PdfCell::plain(truncate(&comment, COMMENT_MAX)),
            ];
            cells.extend(view.months.iter().map(|m| {
                let load = row.load_for(m);
                let (bg, fg) = palette.cell_colors(load);
                PdfCell::filled(load.to_string(), bg, fg.rgb())
            }));
            cells.push(PdfCell::plain(view.row_sum(row).to_string()));
            cells
        })
        .collect();

    let sums = view.column_sums();
    let mut totals = vec![
        PdfCell::plain("Total"),
        PdfCell::plain(""),
        PdfCell::plain(""),
        PdfCell::plain(""),
    ];
    totals.extend(sums.iter().map(|s| PdfCell::plain(s.to_string())));
    totals.push(PdfCell::plain(sums.iter().sum::<i64>().to_string()));
    rows.push(totals);

    rows
}

pub(crate) fn export_pdf(
    view: &MatrixView<'_>,
    palette: &Palette,
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = matrix_headers(view);
    let rows = matrix_cells(view, palette);

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

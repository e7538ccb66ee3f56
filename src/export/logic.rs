// src/export/logic.rs

use crate::core::logic::Core;
use crate::core::palette::Palette;
use crate::core::view::MatrixView;
use crate::db::pool::DbPool;
use crate::db::queries::{RowScope, load_workload_rows};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::WorkloadExport;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::export_html;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::{describe_period, resolve_period};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export workload data.
    ///
    /// - `csv` / `json`: flat rows
    /// - `xlsx` / `pdf` / `html`: the colored matrix
    ///
    /// `range` is `None`, `"all"`, `YYYY`, `YYYY-MM`, or `START:END` of
    /// either form. `file` must be absolute (`~/` is expanded).
    pub fn export(
        pool: &DbPool,
        palette: &Palette,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        team_id: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = resolve_period(range)?;
        let rows = load_workload_rows(&pool.conn, RowScope { bounds, team_id })?;

        if rows.is_empty() {
            warning("No workload found for selected range.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        if format.is_flat() {
            let flat: Vec<WorkloadExport> = rows.iter().map(WorkloadExport::from).collect();
            return match format {
                ExportFormat::Json => export_json(&flat, path),
                _ => export_csv(&flat, path),
            };
        }

        let matrix = Core::build_matrix(&rows);
        let view = MatrixView::all(&matrix);
        let title = format!("Plan de charge, {}", describe_period(bounds));

        match format {
            ExportFormat::Xlsx => export_xlsx(&view, palette, path),
            ExportFormat::Pdf => export_pdf(&view, palette, path, &title),
            _ => export_html(&view, palette, path, &title),
        }
    }
}

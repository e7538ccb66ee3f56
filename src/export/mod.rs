// src/export/mod.rs

pub(crate) mod fs_utils;
pub mod html;
mod json_csv;
pub mod logic;
pub mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::WorkloadExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }

    /// Flat row list, as opposed to the colored matrix.
    pub fn is_flat(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Json)
    }
}

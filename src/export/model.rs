// src/export/model.rs

use crate::core::view::MatrixView;
use crate::models::comment::comment_or_placeholder;
use crate::models::workload::WorkloadRow;
use serde::Serialize;

/// Flat export record, one per (person, subject, month).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkloadExport {
    pub id_pers: i64,
    pub name: String,
    pub firstname: String,
    pub id_subject: i64,
    pub subject: String,
    pub comment: String,
    /// `YYYY-MM`
    pub month: String,
    pub load: i32,
}

impl From<&WorkloadRow> for WorkloadExport {
    fn from(r: &WorkloadRow) -> Self {
        Self {
            id_pers: r.person_id,
            name: r.name.clone(),
            firstname: r.firstname.clone(),
            id_subject: r.subject_id,
            subject: r.subject.clone(),
            comment: comment_or_placeholder(r.comment.as_deref()).to_string(),
            month: r.month.label(),
            load: r.load,
        }
    }
}

pub(crate) const LEAD_HEADERS: [&str; 4] = ["Name", "Firstname", "Subject", "Comment"];

/// Lead columns, one `MM YY` column per visible month, then `Total`.
pub(crate) fn matrix_headers(view: &MatrixView<'_>) -> Vec<String> {
    LEAD_HEADERS
        .iter()
        .map(|h| h.to_string())
        .chain(view.months.iter().map(|m| m.short_label()))
        .chain(std::iter::once("Total".to_string()))
        .collect()
}

/// Lead cells of a matrix row, before the month cells.
pub(crate) fn lead_cells(view: &MatrixView<'_>, idx: usize) -> [String; 4] {
    let r = view.rows[idx];
    [
        r.name.clone(),
        r.firstname.clone(),
        r.subject.clone(),
        r.comment.clone(),
    ]
}

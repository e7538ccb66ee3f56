use crate::core::palette::Palette;
use crate::core::view::MatrixView;
use crate::models::month::Month;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct CellResponse {
    pub month: Month,
    pub load: i32,
    /// `#rrggbb`
    pub background: String,
    /// `#000000` or `#FFFFFF`
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MatrixRowResponse {
    pub id_pers: i64,
    pub id_subject: i64,
    pub name: String,
    pub firstname: String,
    pub subject: String,
    pub comment: String,
    pub total: i64,
    pub cells: Vec<CellResponse>,
}

#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    pub months: Vec<Month>,
    pub rows: Vec<MatrixRowResponse>,
    pub totals: Vec<i64>,
}

impl MatrixResponse {
    pub fn from_view(view: &MatrixView<'_>, palette: &Palette) -> Self {
        let rows = view
            .rows
            .iter()
            .map(|r| MatrixRowResponse {
                id_pers: r.person_id,
                id_subject: r.subject_id,
                name: r.name.clone(),
                firstname: r.firstname.clone(),
                subject: r.subject.clone(),
                comment: r.comment.clone(),
                total: view.row_sum(r),
                cells: view
                    .months
                    .iter()
                    .map(|m| {
                        let load = r.load_for(m);
                        let (bg, fg) = palette.cell_colors(load);
                        CellResponse {
                            month: *m,
                            load,
                            background: bg.to_hex(),
                            color: fg.as_hex(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            months: view.months.clone(),
            rows,
            totals: view.column_sums(),
        }
    }
}

use crate::core::view::{MatrixFilter, SortKey};
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use crate::models::workload::WorkloadEntry;
use serde::Deserialize;

/// Body of `POST /api/submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(alias = "ID_pers")]
    pub id_pers: i64,
    #[serde(alias = "ID_subject")]
    pub id_subject: i64,
    pub month: String,
    pub load: i64,
}

impl SubmitRequest {
    pub fn into_entry(self) -> AppResult<WorkloadEntry> {
        let month = Month::parse(&self.month)?;
        let load = i32::try_from(self.load).map_err(|_| AppError::InvalidLoad(self.load))?;
        WorkloadEntry::new(self.id_pers, self.id_subject, month, load)
    }
}

/// Query string of `GET /api/matrix`.
#[derive(Debug, Default, Deserialize)]
pub struct MatrixQuery {
    pub name: Option<String>,
    pub subject: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub desc: bool,
    #[serde(default)]
    pub all: bool,
}

fn month_param(value: Option<&str>) -> AppResult<Option<Month>> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Month::parse(v).map(Some),
        _ => Ok(None),
    }
}

impl MatrixQuery {
    pub fn into_filter(self) -> AppResult<MatrixFilter> {
        let filter = MatrixFilter {
            from: month_param(self.from.as_deref())?,
            to: month_param(self.to.as_deref())?,
            name: self.name,
            subject: self.subject,
            sort: self.sort,
            descending: self.desc,
            keep_empty: self.all,
        };
        filter.validate()?;
        Ok(filter)
    }
}

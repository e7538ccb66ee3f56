use super::month::Month;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Highest load a person can carry on one subject in one month (days).
pub const MAX_LOAD: i32 = 31;

/// One (person, subject, month) allocation joined with its display fields.
///
/// Matches the JSON served by `/api/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadRow {
    #[serde(rename = "id_pers")]
    pub person_id: i64,
    #[serde(rename = "id_subject")]
    pub subject_id: i64,
    pub name: String,
    pub firstname: String,
    pub subject: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub month: Month,
    pub load: i32,
}

/// A load to record, as submitted by the CLI or `POST /api/submit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadEntry {
    #[serde(rename = "id_pers")]
    pub person_id: i64,
    #[serde(rename = "id_subject")]
    pub subject_id: i64,
    pub month: Month,
    pub load: i32,
}

impl WorkloadEntry {
    pub fn new(person_id: i64, subject_id: i64, month: Month, load: i32) -> AppResult<Self> {
        validate_load(load)?;
        Ok(Self {
            person_id,
            subject_id,
            month,
            load,
        })
    }
}

/// Result of an upsert on the workload table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Inserted,
    Updated,
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Inserted => "Record inserted successfully",
            SubmitOutcome::Updated => "Record updated successfully",
        }
    }
}

pub fn validate_load(load: i32) -> AppResult<i32> {
    if (0..=MAX_LOAD).contains(&load) {
        Ok(load)
    } else {
        Err(AppError::InvalidLoad(load as i64))
    }
}

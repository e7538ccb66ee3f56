use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    clear_comment, delete_workload, find_person, set_comment, subject_exists, upsert_workload,
};
use crate::errors::{AppError, AppResult};
use crate::models::comment::Comment;
use crate::models::month::Month;
use crate::models::workload::{SubmitOutcome, WorkloadEntry};

fn ensure_pair_exists(pool: &DbPool, person_id: i64, subject_id: i64) -> AppResult<()> {
    if find_person(&pool.conn, person_id)?.is_none() {
        return Err(AppError::PersonNotFound(person_id));
    }
    if !subject_exists(&pool.conn, subject_id)? {
        return Err(AppError::SubjectNotFound(subject_id));
    }
    Ok(())
}

/// Record loads for (person, subject, month).
pub struct SubmitLogic;

impl SubmitLogic {
    /// Insert the load, or update it when the month is already planned.
    pub fn apply(
        pool: &mut DbPool,
        entry: &WorkloadEntry,
        source: &str,
    ) -> AppResult<SubmitOutcome> {
        crate::models::workload::validate_load(entry.load)?;
        ensure_pair_exists(pool, entry.person_id, entry.subject_id)?;

        let tx = pool.conn.transaction()?;
        let outcome = upsert_workload(&tx, entry)?;
        ttlog(
            &tx,
            "set",
            &format!(
                "{}/{}/{}",
                entry.person_id,
                entry.subject_id,
                entry.month.label()
            ),
            &format!("load={} ({}, {})", entry.load, outcome.message(), source),
        )?;
        tx.commit()?;

        Ok(outcome)
    }

    pub fn remove(
        pool: &mut DbPool,
        person_id: i64,
        subject_id: i64,
        month: &Month,
    ) -> AppResult<bool> {
        let removed = delete_workload(&pool.conn, person_id, subject_id, month)?;
        if removed {
            ttlog(
                &pool.conn,
                "unset",
                &format!("{}/{}/{}", person_id, subject_id, month.label()),
                "Workload entry removed",
            )?;
        }
        Ok(removed)
    }
}

/// Comments attached to a (person, subject) pair.
pub struct CommentLogic;

impl CommentLogic {
    pub fn set(pool: &mut DbPool, person_id: i64, subject_id: i64, text: &str) -> AppResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput("comment text is empty".into()));
        }
        ensure_pair_exists(pool, person_id, subject_id)?;

        set_comment(
            &pool.conn,
            &Comment {
                person_id,
                subject_id,
                comment: text.to_string(),
            },
        )?;
        ttlog(
            &pool.conn,
            "comment",
            &format!("{}/{}", person_id, subject_id),
            text,
        )?;
        Ok(())
    }

    pub fn clear(pool: &mut DbPool, person_id: i64, subject_id: i64) -> AppResult<bool> {
        let removed = clear_comment(&pool.conn, person_id, subject_id)?;
        if removed {
            ttlog(
                &pool.conn,
                "comment",
                &format!("{}/{}", person_id, subject_id),
                "Comment cleared",
            )?;
        }
        Ok(removed)
    }
}

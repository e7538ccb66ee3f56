//! Reference data: persons, subjects and teams.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};

fn required<'a>(field: &str, value: &'a str) -> AppResult<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        Err(AppError::InvalidInput(format!("{field} must not be empty")))
    } else {
        Ok(v)
    }
}

fn ensure_team(pool: &DbPool, team_id: Option<i64>) -> AppResult<()> {
    if let Some(id) = team_id
        && !queries::team_exists(&pool.conn, id)?
    {
        return Err(AppError::TeamNotFound(id));
    }
    Ok(())
}

pub struct PersonLogic;

impl PersonLogic {
    pub fn add(
        pool: &mut DbPool,
        name: &str,
        firstname: &str,
        team_id: Option<i64>,
    ) -> AppResult<i64> {
        let name = required("name", name)?;
        let firstname = required("firstname", firstname)?;
        ensure_team(pool, team_id)?;

        let id = queries::insert_person(&pool.conn, name, firstname, team_id)?;
        ttlog(
            &pool.conn,
            "person",
            &id.to_string(),
            &format!("Added {name} {firstname}"),
        )?;
        Ok(id)
    }

    pub fn assign_team(pool: &mut DbPool, id: i64, team_id: Option<i64>) -> AppResult<()> {
        ensure_team(pool, team_id)?;
        queries::set_person_team(&pool.conn, id, team_id)?;
        let msg = match team_id {
            Some(t) => format!("Assigned to team {t}"),
            None => "Removed from team".to_string(),
        };
        ttlog(&pool.conn, "person", &id.to_string(), &msg)?;
        Ok(())
    }

    /// Also removes the person's loads, comment and admin entry.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_person(&pool.conn, id)?;
        ttlog(&pool.conn, "person", &id.to_string(), "Deleted")?;
        Ok(())
    }
}

pub struct SubjectLogic;

impl SubjectLogic {
    pub fn add(pool: &mut DbPool, subject: &str) -> AppResult<i64> {
        let subject = required("subject", subject)?;
        let id = queries::insert_subject(&pool.conn, subject)?;
        ttlog(
            &pool.conn,
            "subject",
            &id.to_string(),
            &format!("Added {subject}"),
        )?;
        Ok(id)
    }

    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_subject(&pool.conn, id)?;
        ttlog(&pool.conn, "subject", &id.to_string(), "Deleted")?;
        Ok(())
    }
}

pub struct TeamLogic;

impl TeamLogic {
    pub fn add(pool: &mut DbPool, team: &str) -> AppResult<i64> {
        let team = required("team", team)?;
        let id = queries::insert_team(&pool.conn, team)?;
        ttlog(&pool.conn, "team", &id.to_string(), &format!("Added {team}"))?;
        Ok(id)
    }

    /// Members stay, with no team.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<()> {
        queries::delete_team(&pool.conn, id)?;
        ttlog(&pool.conn, "team", &id.to_string(), "Deleted")?;
        Ok(())
    }
}

use crate::errors::{AppError, AppResult};
use crate::models::admin::Admin;
use crate::models::comment::Comment;
use crate::models::month::Month;
use crate::models::person::Person;
use crate::models::subject::Subject;
use crate::models::team::Team;
use crate::models::workload::{SubmitOutcome, WorkloadEntry, WorkloadRow};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Restrictions applied when loading workload rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowScope {
    /// Inclusive month bounds.
    pub bounds: Option<(Month, Month)>,
    pub team_id: Option<i64>,
}

const WORKLOAD_SELECT: &str = "
    SELECT
        w.id_pers,
        w.id_subject,
        p.name,
        p.firstname,
        s.subject,
        c.comment,
        w.month,
        w.load
    FROM workloads w
    JOIN persons p ON w.id_pers = p.id_pers
    JOIN subjects s ON w.id_subject = s.id_subject
    LEFT JOIN comments c ON w.id_pers = c.id_pers AND w.id_subject = c.id_subject
    WHERE (?1 IS NULL OR w.month >= ?1)
      AND (?2 IS NULL OR w.month <= ?2)
      AND (?3 IS NULL OR p.id_team = ?3)
    ORDER BY p.name ASC, p.firstname ASC, s.subject ASC, w.month ASC";

/// Every workload row joined with person, subject and comment.
pub fn load_workload_rows(conn: &Connection, scope: RowScope) -> AppResult<Vec<WorkloadRow>> {
    let (from, to) = match scope.bounds {
        Some((a, b)) => (Some(a.to_string()), Some(b.to_string())),
        None => (None, None),
    };

    let mut stmt = conn.prepare_cached(WORKLOAD_SELECT)?;
    let rows = stmt.query_map(params![from, to, scope.team_id], map_workload_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_workload_row(row: &Row) -> Result<WorkloadRow> {
    let month_str: String = row.get("month")?;
    let month = Month::parse(&month_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(WorkloadRow {
        person_id: row.get("id_pers")?,
        subject_id: row.get("id_subject")?,
        name: row.get("name")?,
        firstname: row.get("firstname")?,
        subject: row.get("subject")?,
        comment: row.get("comment")?,
        month,
        load: row.get("load")?,
    })
}

/// Insert or update the load of (person, subject, month).
pub fn upsert_workload(conn: &Connection, entry: &WorkloadEntry) -> AppResult<SubmitOutcome> {
    let month = entry.month.to_string();

    let exists = conn
        .query_row(
            "SELECT 1 FROM workloads
             WHERE id_pers = ?1 AND id_subject = ?2 AND month = ?3",
            params![entry.person_id, entry.subject_id, month],
            |_| Ok(()),
        )
        .optional()?
        .is_some();

    if exists {
        conn.execute(
            "UPDATE workloads SET load = ?1
             WHERE id_pers = ?2 AND id_subject = ?3 AND month = ?4",
            params![entry.load, entry.person_id, entry.subject_id, month],
        )?;
        Ok(SubmitOutcome::Updated)
    } else {
        conn.execute(
            "INSERT INTO workloads (id_pers, id_subject, month, load)
             VALUES (?1, ?2, ?3, ?4)",
            params![entry.person_id, entry.subject_id, month, entry.load],
        )?;
        Ok(SubmitOutcome::Inserted)
    }
}

pub fn delete_workload(
    conn: &Connection,
    person_id: i64,
    subject_id: i64,
    month: &Month,
) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM workloads WHERE id_pers = ?1 AND id_subject = ?2 AND month = ?3",
        params![person_id, subject_id, month.to_string()],
    )?;
    Ok(n > 0)
}

/// First and last month holding at least one load.
pub fn month_span(conn: &Connection) -> AppResult<Option<(Month, Month)>> {
    let span: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(month), MAX(month) FROM workloads",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match span {
        (Some(a), Some(b)) => Ok(Some((Month::parse(&a)?, Month::parse(&b)?))),
        _ => Ok(None),
    }
}

// ---------------------------
// Persons
// ---------------------------

fn map_person(row: &Row) -> Result<Person> {
    Ok(Person {
        id: row.get("id_pers")?,
        name: row.get("name")?,
        firstname: row.get("firstname")?,
        team_id: row.get("id_team")?,
        team: row.get("team")?,
    })
}

pub fn list_persons(conn: &Connection) -> AppResult<Vec<Person>> {
    let mut stmt = conn.prepare_cached(
        "SELECT p.id_pers, p.name, p.firstname, p.id_team, t.team
         FROM persons p
         LEFT JOIN teams t ON p.id_team = t.id_team
         ORDER BY p.name ASC, p.firstname ASC",
    )?;
    let rows = stmt.query_map([], map_person)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_person(conn: &Connection, id: i64) -> AppResult<Option<Person>> {
    let person = conn
        .query_row(
            "SELECT p.id_pers, p.name, p.firstname, p.id_team, t.team
             FROM persons p
             LEFT JOIN teams t ON p.id_team = t.id_team
             WHERE p.id_pers = ?1",
            [id],
            map_person,
        )
        .optional()?;
    Ok(person)
}

pub fn insert_person(
    conn: &Connection,
    name: &str,
    firstname: &str,
    team_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO persons (name, firstname, id_team) VALUES (?1, ?2, ?3)",
        params![name, firstname, team_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_person_team(conn: &Connection, id: i64, team_id: Option<i64>) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE persons SET id_team = ?1 WHERE id_pers = ?2",
        params![team_id, id],
    )?;
    if n == 0 {
        return Err(AppError::PersonNotFound(id));
    }
    Ok(())
}

pub fn delete_person(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM persons WHERE id_pers = ?1", [id])?;
    if n == 0 {
        return Err(AppError::PersonNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Subjects
// ---------------------------

pub fn list_subjects(conn: &Connection) -> AppResult<Vec<Subject>> {
    let mut stmt =
        conn.prepare_cached("SELECT id_subject, subject FROM subjects ORDER BY subject ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Subject {
            id: row.get(0)?,
            subject: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn subject_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM subjects WHERE id_subject = ?1", [id], |_| {
            Ok(())
        })
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_subject(conn: &Connection, subject: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO subjects (subject) VALUES (?1)", [subject])?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_subject(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM subjects WHERE id_subject = ?1", [id])?;
    if n == 0 {
        return Err(AppError::SubjectNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Teams
// ---------------------------

pub fn list_teams(conn: &Connection) -> AppResult<Vec<Team>> {
    let mut stmt = conn.prepare_cached("SELECT id_team, team FROM teams ORDER BY team ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Team {
            id: row.get(0)?,
            team: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn team_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let found = conn
        .query_row("SELECT 1 FROM teams WHERE id_team = ?1", [id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_team(conn: &Connection, team: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO teams (team) VALUES (?1)", [team])?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_team(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM teams WHERE id_team = ?1", [id])?;
    if n == 0 {
        return Err(AppError::TeamNotFound(id));
    }
    Ok(())
}

// ---------------------------
// Comments
// ---------------------------

pub fn set_comment(conn: &Connection, comment: &Comment) -> AppResult<()> {
    conn.execute(
        "INSERT INTO comments (id_pers, id_subject, comment) VALUES (?1, ?2, ?3)
         ON CONFLICT(id_pers, id_subject) DO UPDATE SET comment = excluded.comment",
        params![comment.person_id, comment.subject_id, comment.comment],
    )?;
    Ok(())
}

pub fn clear_comment(conn: &Connection, person_id: i64, subject_id: i64) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM comments WHERE id_pers = ?1 AND id_subject = ?2",
        params![person_id, subject_id],
    )?;
    Ok(n > 0)
}

pub fn find_comment(
    conn: &Connection,
    person_id: i64,
    subject_id: i64,
) -> AppResult<Option<String>> {
    let c = conn
        .query_row(
            "SELECT comment FROM comments WHERE id_pers = ?1 AND id_subject = ?2",
            params![person_id, subject_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(c)
}

// ---------------------------
// Admins
// ---------------------------

fn map_admin(row: &Row) -> Result<Admin> {
    Ok(Admin {
        id: row.get("id_admin")?,
        person_id: row.get("id_pers")?,
        login: row.get("login")?,
        name: row.get("name")?,
        firstname: row.get("firstname")?,
    })
}

pub fn list_admins(conn: &Connection) -> AppResult<Vec<Admin>> {
    let mut stmt = conn.prepare_cached(
        "SELECT a.id_admin, a.id_pers, a.login, p.name, p.firstname
         FROM admins a
         JOIN persons p ON a.id_pers = p.id_pers
         ORDER BY a.login ASC",
    )?;
    let rows = stmt.query_map([], map_admin)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_admin_by_login(conn: &Connection, login: &str) -> AppResult<Option<Admin>> {
    let admin = conn
        .query_row(
            "SELECT a.id_admin, a.id_pers, a.login, p.name, p.firstname
             FROM admins a
             JOIN persons p ON a.id_pers = p.id_pers
             WHERE a.login = ?1",
            [login],
            map_admin,
        )
        .optional()?;
    Ok(admin)
}

pub fn insert_admin(conn: &Connection, person_id: i64, login: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO admins (id_pers, login) VALUES (?1, ?2)",
        params![person_id, login],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_admin(conn: &Connection, login: &str) -> AppResult<()> {
    let n = conn.execute("DELETE FROM admins WHERE login = ?1", [login])?;
    if n == 0 {
        return Err(AppError::AdminNotFound(login.to_string()));
    }
    Ok(())
}

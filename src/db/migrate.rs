use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// A schema step, applied at most once per database.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240901_0001_reference_tables",
        description: "Created teams, persons and subjects tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS teams (
            id_team  INTEGER PRIMARY KEY AUTOINCREMENT,
            team     TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS persons (
            id_pers    INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            firstname  TEXT NOT NULL,
            id_team    INTEGER REFERENCES teams(id_team) ON DELETE SET NULL
        );

        CREATE TABLE IF NOT EXISTS subjects (
            id_subject  INTEGER PRIMARY KEY AUTOINCREMENT,
            subject     TEXT NOT NULL UNIQUE
        );
        "#,
    },
    Migration {
        version: "20240901_0002_workloads",
        description: "Created workloads table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS workloads (
            id_pers     INTEGER NOT NULL REFERENCES persons(id_pers) ON DELETE CASCADE,
            id_subject  INTEGER NOT NULL REFERENCES subjects(id_subject) ON DELETE CASCADE,
            month       TEXT NOT NULL,
            load        INTEGER NOT NULL CHECK(load BETWEEN 0 AND 31),
            PRIMARY KEY (id_pers, id_subject, month)
        );

        CREATE INDEX IF NOT EXISTS idx_workloads_month ON workloads(month);
        "#,
    },
    Migration {
        version: "20240915_0003_comments",
        description: "Created comments table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS comments (
            id_pers     INTEGER NOT NULL REFERENCES persons(id_pers) ON DELETE CASCADE,
            id_subject  INTEGER NOT NULL REFERENCES subjects(id_subject) ON DELETE CASCADE,
            comment     TEXT NOT NULL,
            PRIMARY KEY (id_pers, id_subject)
        );
        "#,
    },
    Migration {
        version: "20241002_0004_admins",
        description: "Created admins table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS admins (
            id_admin  INTEGER PRIMARY KEY AUTOINCREMENT,
            id_pers   INTEGER NOT NULL UNIQUE REFERENCES persons(id_pers) ON DELETE CASCADE,
            login     TEXT NOT NULL UNIQUE
        );
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    if is_applied(conn, m.version)? {
        return Ok(());
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        apply(conn, m)?;
    }

    Ok(())
}

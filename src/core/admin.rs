use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_admin, find_admin_by_login, find_person, insert_admin};
use crate::errors::{AppError, AppResult};
use crate::models::admin::Admin;

pub struct AdminLogic;

impl AdminLogic {
    pub fn grant(pool: &mut DbPool, person_id: i64, login: &str) -> AppResult<i64> {
        let login = login.trim();
        if login.is_empty() {
            return Err(AppError::InvalidInput("login must not be empty".into()));
        }
        if find_person(&pool.conn, person_id)?.is_none() {
            return Err(AppError::PersonNotFound(person_id));
        }

        let id = insert_admin(&pool.conn, person_id, login)?;
        ttlog(
            &pool.conn,
            "admin",
            login,
            &format!("Granted to person {person_id}"),
        )?;
        Ok(id)
    }

    pub fn revoke(pool: &mut DbPool, login: &str) -> AppResult<()> {
        delete_admin(&pool.conn, login)?;
        ttlog(&pool.conn, "admin", login, "Revoked")?;
        Ok(())
    }

    /// Resolve the login presented by a caller.
    ///
    /// `None` → [`AppError::Unauthorized`]; unknown login →
    /// [`AppError::Forbidden`].
    pub fn authorize(pool: &DbPool, login: Option<&str>) -> AppResult<Admin> {
        let login = match login.map(str::trim) {
            Some(l) if !l.is_empty() => l,
            _ => return Err(AppError::Unauthorized),
        };

        find_admin_by_login(&pool.conn, login)?.ok_or_else(|| AppError::Forbidden(login.into()))
    }
}

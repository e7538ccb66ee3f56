use crate::config::Config;
use crate::core::admin::AdminLogic;
use crate::core::logic::Core;
use crate::core::palette::Palette;
use crate::core::view::{MatrixFilter, MatrixView};
use crate::core::workload::SubmitLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{self, RowScope};
use crate::errors::{AppError, AppResult};
use crate::models::person::Person;
use crate::models::subject::Subject;
use crate::models::team::Team;
use crate::models::workload::{SubmitOutcome, WorkloadEntry, WorkloadRow};
use actix_web::web;

use super::response::MatrixResponse;

/// Shared, read-only server state. Every call opens its own connection on
/// the blocking pool.
#[derive(Debug, Clone)]
pub struct Api {
    database: String,
    require_admin: bool,
    palette: Palette,
}

impl Api {
    pub fn new(cfg: &Config, palette: Palette) -> Self {
        Self {
            database: cfg.database.clone(),
            require_admin: cfg.require_admin,
            palette,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn require_admin(&self) -> bool {
        self.require_admin
    }

    async fn with_pool<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.database.clone();
        web::block(move || -> AppResult<T> {
            let mut pool = DbPool::new(&database)?;
            f(&mut pool)
        })
        .await
        .map_err(|e| AppError::Other(format!("blocking task failed: {e}")))?
    }

    pub async fn rows(&self) -> AppResult<Vec<WorkloadRow>> {
        self.with_pool(|pool| queries::load_workload_rows(&pool.conn, RowScope::default()))
            .await
    }

    pub async fn persons(&self) -> AppResult<Vec<Person>> {
        self.with_pool(|pool| queries::list_persons(&pool.conn)).await
    }

    pub async fn subjects(&self) -> AppResult<Vec<Subject>> {
        self.with_pool(|pool| queries::list_subjects(&pool.conn)).await
    }

    pub async fn teams(&self) -> AppResult<Vec<Team>> {
        self.with_pool(|pool| queries::list_teams(&pool.conn)).await
    }

    pub async fn matrix(&self, filter: MatrixFilter) -> AppResult<MatrixResponse> {
        filter.validate()?;
        let palette = self.palette.clone();
        self.with_pool(move |pool| {
            let matrix = Core::load_matrix(pool, RowScope::default())?;
            let view = MatrixView::new(&matrix, &filter)?;
            Ok(MatrixResponse::from_view(&view, &palette))
        })
        .await
    }

    pub async fn list_all(&self) -> AppResult<String> {
        let palette = self.palette.clone();
        self.with_pool(move |pool| {
            let matrix = Core::load_matrix(pool, RowScope::default())?;
            Ok(crate::export::html::render_table(
                &MatrixView::all(&matrix),
                &palette,
            ))
        })
        .await
    }

    /// Upsert a load. With `require_admin`, `login` must name an admin.
    pub async fn submit(
        &self,
        login: Option<String>,
        entry: WorkloadEntry,
    ) -> AppResult<SubmitOutcome> {
        let require_admin = self.require_admin;
        self.with_pool(move |pool| {
            let source = if require_admin {
                let admin = AdminLogic::authorize(pool, login.as_deref())?;
                format!("api:{}", admin.login)
            } else {
                "api".to_string()
            };
            SubmitLogic::apply(pool, &entry, &source)
        })
        .await
    }
}

pub mod admin;
pub mod backup;
pub mod comment;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod palette;
pub mod person;
pub mod serve;
pub mod set;
pub mod show;
pub mod subject;
pub mod team;

use crate::config::Config;
use crate::core::palette::Palette;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Open the configured database with every migration applied.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Load the configured palette, reporting a table that leaves part of the
/// load range clamped.
pub(crate) fn load_palette(cfg: &Config) -> AppResult<Palette> {
    let palette = Palette::from_config(cfg)?;
    if let Some(w) = palette.coverage_warning() {
        ::log::warn!("{w}");
        warning(w);
    }
    Ok(palette)
}

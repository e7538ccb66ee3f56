use super::{load_palette, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        team,
        force,
    } = cmd
    {
        let palette = load_palette(cfg)?;
        let pool = open_pool(cfg)?;
        ExportLogic::export(&pool, &palette, *format, file, range, *team, *force)?;
    }
    Ok(())
}

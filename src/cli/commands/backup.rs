use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;
        BackupLogic::backup(&mut pool, cfg, file, *compress, *force)?;
    }

    Ok(())
}

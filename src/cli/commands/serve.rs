use super::load_palette;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::Server;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();

        let palette = load_palette(cfg)?;
        let bind = bind.clone().unwrap_or_else(|| cfg.bind.clone());

        info(format!("Serving on http://{bind} (Ctrl+C to stop)"));
        actix_web::rt::System::new().block_on(Server::run(cfg, palette, &bind))?;
    }

    Ok(())
}

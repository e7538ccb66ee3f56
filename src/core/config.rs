use crate::config::Config;
use crate::config::migrate::{check_config_file, fill_missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (after `--db` override).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Report missing fields, then write their defaults back.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `init` first)",
                path.display()
            )));
        }
        let missing = check_config_file(path)?;
        if missing.is_empty() {
            return Ok(missing);
        }
        Ok(fill_missing_fields(path)?)
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    fn run_editor(editor: &str, path: &Path) -> bool {
        matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
    }

    /// Open the configuration file, falling back to `$EDITOR` when the
    /// requested editor fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let fallback = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| fallback.clone());

        if Self::run_editor(&requested, path) {
            success(format!("Configuration file edited using '{requested}'"));
            return Ok(());
        }
        if requested == fallback {
            error(format!("Failed to edit configuration with '{requested}'"));
            return Err(AppError::Config(format!("editor '{requested}' failed")));
        }

        warning(format!(
            "Editor '{requested}' not available, falling back to '{fallback}'"
        ));
        if Self::run_editor(&fallback, path) {
            success(format!("Configuration file edited using '{fallback}'"));
            Ok(())
        } else {
            Err(AppError::Config(format!("editor '{fallback}' failed")))
        }
    }
}

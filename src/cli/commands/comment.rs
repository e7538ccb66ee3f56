use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workload::CommentLogic;
use crate::db::queries::find_comment;
use crate::errors::AppResult;
use crate::models::comment::comment_or_placeholder;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::colorize_comment;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Comment {
        person,
        subject,
        text,
        clear,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        if *clear {
            if CommentLogic::clear(&mut pool, *person, *subject)? {
                success("Comment cleared");
            } else {
                warning("No comment to clear");
            }
        } else if let Some(t) = text {
            CommentLogic::set(&mut pool, *person, *subject, t)?;
            success("Comment saved");
        } else {
            let current = find_comment(&pool.conn, *person, *subject)?;
            info(colorize_comment(comment_or_placeholder(current.as_deref())));
        }
    }

    Ok(())
}

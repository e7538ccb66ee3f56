use super::load_palette;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::workload::{MAX_LOAD, validate_load};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, cell_style};
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Palette { load } = cmd {
        let palette = load_palette(cfg)?;
        let source = cfg.palette.as_deref().unwrap_or("built-in");

        if let Some(load) = load {
            validate_load(*load)?;
            let (bg, fg) = palette.cell_colors(*load);
            println!(
                "{} {load:>2} {} background {bg}, text {}",
                cell_style(bg, fg),
                RESET,
                fg.as_hex()
            );
            return Ok(());
        }

        header(format!("Palette ({source})"), &cfg.separator_char);

        let mut table = Table::new(vec![
            Column::right("Threshold"),
            Column::left("Color"),
            Column::center("Sample"),
        ])
        .with_separator(&cfg.separator_char);

        for bp in palette.breakpoints() {
            let (bg, fg) = palette.cell_colors(bp.threshold);
            table.add_row(vec![
                Cell::from(bp.threshold.to_string()),
                Cell::from(bp.color.to_hex()),
                Cell::styled(bp.threshold.to_string(), cell_style(bg, fg)),
            ]);
        }
        print!("{}", table.render());

        // every load, interpolated
        let strip: String = (0..=MAX_LOAD)
            .map(|l| {
                let (bg, fg) = palette.cell_colors(l);
                format!("{}{l:>3}", cell_style(bg, fg))
            })
            .collect();
        println!("\n{strip}{RESET}");
    }

    Ok(())
}

use super::{load_palette, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::palette::Palette;
use crate::core::view::{MatrixFilter, MatrixView};
use crate::db::queries::RowScope;
use crate::errors::AppResult;
use crate::models::month::Month;
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, cell_style, color_for_total, colorize_comment};
use crate::utils::date::{describe_period, resolve_period};
use crate::utils::formatting::truncate;
use crate::utils::table::{Cell, Column, Table};

const COMMENT_MAX: usize = 30;

fn month_arg(value: &Option<String>) -> AppResult<Option<Month>> {
    value.as_deref().map(Month::parse).transpose()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        team,
        name,
        subject,
        from,
        to,
        sort,
        desc,
        all,
    } = cmd
    {
        let palette = load_palette(cfg)?;

        let filter = MatrixFilter {
            name: name.clone(),
            subject: subject.clone(),
            from: month_arg(from)?,
            to: month_arg(to)?,
            sort: *sort,
            descending: *desc,
            keep_empty: *all,
        };
        filter.validate()?;

        let bounds = resolve_period(period)?;
        let pool = open_pool(cfg)?;
        let matrix = Core::load_matrix(
            &pool,
            RowScope {
                bounds,
                team_id: *team,
            },
        )?;
        let view = MatrixView::new(&matrix, &filter)?;

        if view.is_empty() {
            info(format!("No workload for {}.", describe_period(bounds)));
            return Ok(());
        }

        header(
            format!("Plan de charge, {}", describe_period(bounds)),
            &cfg.separator_char,
        );
        print!("{}", render_matrix(&view, &palette, &cfg.separator_char));
    }

    Ok(())
}

/// Terminal table: one shaded cell per visible month, totals last.
pub fn render_matrix(view: &MatrixView<'_>, palette: &Palette, separator: &str) -> String {
    let mut columns = vec![
        Column::left("Name"),
        Column::left("Firstname"),
        Column::left("Subject"),
        Column::left("Comment"),
    ];
    columns.extend(view.months.iter().map(|m| Column::center(m.short_label())));
    columns.push(Column::right("Total"));

    let mut table = Table::new(columns).with_separator(separator);
    let months = view.months.len();

    for row in &view.rows {
        let mut cells: Vec<Cell> = vec![
            row.name.as_str().into(),
            row.firstname.as_str().into(),
            row.subject.as_str().into(),
            colorize_comment(&truncate(&row.comment, COMMENT_MAX)).into(),
        ];

        for m in &view.months {
            let load = row.load_for(m);
            let (bg, fg) = palette.cell_colors(load);
            cells.push(Cell::styled(load.to_string(), cell_style(bg, fg)));
        }

        let total = view.row_sum(row);
        cells.push(format!("{}{total}{RESET}", color_for_total(total, months)).into());
        table.add_row(cells);
    }

    let sums = view.column_sums();
    let mut footer: Vec<Cell> = vec!["Total".into(), "".into(), "".into(), "".into()];
    footer.extend(sums.iter().map(|s| Cell::from(s.to_string())));
    footer.push(Cell::from(sums.iter().sum::<i64>().to_string()));
    table.add_row(footer);

    table.render()
}

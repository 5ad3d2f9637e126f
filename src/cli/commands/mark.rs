use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mark::MarkLogic;
use crate::core::selection::{parse_selection, select_by_names};
use crate::core::session::load_table;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RosterStore;
use crate::ui::messages::success;
use crate::ui::view::print_table;
use crate::utils::date::format_date;
use crate::utils::path::{expand_tilde, resolve};

/// Mark rows for today, show the result and optionally save it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        status,
        rows,
        students,
        save,
        file,
        format,
    } = cmd
    {
        let roster = RosterStore::new(expand_tilde(&cfg.roster_file));
        let mut table = load_table(&roster)?;

        //
        // 1. Build the selection (rows expression + names)
        //
        let mut selected = match rows {
            Some(expr) => parse_selection(expr, table.len())?,
            None => Vec::new(),
        };
        selected.extend(select_by_names(&table, students)?);

        //
        // 2. Mark
        //
        let summary = MarkLogic::apply(&mut table, &selected, *status)?;
        success(format!(
            "Marked {} student(s) {} on {}",
            summary.count,
            summary.status,
            format_date(summary.date)
        ));
        print_table(&table, &selected);

        let marked: Vec<&str> = table
            .rows()
            .iter()
            .filter(|r| r.date == Some(summary.date) && r.status == Some(summary.status))
            .map(|r| r.name.as_str())
            .collect();
        record(
            &cfg.database,
            "mark",
            summary.status.as_str(),
            &format!("{}: {}", format_date(summary.date), marked.join(", ")),
        );

        //
        // 3. Save (the marked table lives only in this process)
        //
        if *save {
            let path = resolve(file.as_deref(), &cfg.export_file);
            ExportLogic::export(&table, &path, *format, cfg.trailing_comma, true)?;
            record(
                &cfg.database,
                "export",
                &path.to_string_lossy(),
                &format!("{} rows exported as {}", table.len(), format.as_str()),
            );
        }
    }

    Ok(())
}

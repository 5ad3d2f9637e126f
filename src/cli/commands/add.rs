use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::session::load_table;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::store::RosterStore;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

/// Add a student to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        let roster = RosterStore::new(expand_tilde(&cfg.roster_file));
        let mut table = load_table(&roster)?;

        let stored = AddLogic::apply(&mut table, &roster, name)?;

        success(format!(
            "Student '{}' added ({} students in roster)",
            stored,
            table.len()
        ));
        record(
            &cfg.database,
            "add",
            &stored,
            &format!("Student added to {}", roster.path().display()),
        );
    }

    Ok(())
}

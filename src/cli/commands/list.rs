use crate::config::Config;
use crate::core::session::load_table;
use crate::errors::AppResult;
use crate::store::RosterStore;
use crate::ui::view::print_table;
use crate::utils::path::expand_tilde;

/// Show the freshly loaded attendance table.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let roster = RosterStore::new(expand_tilde(&cfg.roster_file));
    let table = load_table(&roster)?;
    print_table(&table, &[]);
    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::load_table;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RosterStore;
use crate::utils::path::{expand_tilde, resolve};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let roster = RosterStore::new(expand_tilde(&cfg.roster_file));
        let table = load_table(&roster)?;
        let path = resolve(file.as_deref(), &cfg.export_file);

        ExportLogic::export(&table, &path, *format, cfg.trailing_comma, *force)?;

        record(
            &cfg.database,
            "export",
            &path.to_string_lossy(),
            &format!("{} rows exported as {}", table.len(), format.as_str()),
        );
    }
    Ok(())
}

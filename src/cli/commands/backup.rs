use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log::record;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let roster = expand_tilde(&cfg.roster_file);
        let written = BackupLogic::backup(&roster, &expand_tilde(file), *compress, *force)?;

        record(
            &cfg.database,
            "backup",
            &written.to_string_lossy(),
            if *compress {
                "Roster backup created and compressed"
            } else {
                "Roster backup created"
            },
        );
    }

    Ok(())
}

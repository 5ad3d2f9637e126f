use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::RosterStore;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (file skipped in test mode)
///  - the audit log database
///  - an empty roster file, if none exists yet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rattendance…");

    //
    // 1️⃣ CONFIGURATION
    //
    Config::init_all(cfg, cli.test)?;

    //
    // 2️⃣ AUDIT LOG
    //
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    println!("✅ Database:    {}", &cfg.database);

    //
    // 3️⃣ ROSTER
    //
    let roster = RosterStore::new(expand_tilde(&cfg.roster_file));
    if roster.touch()? {
        println!("✅ Roster:      {} (created)", roster.path().display());
    } else {
        println!("✅ Roster:      {}", roster.path().display());
    }

    // internal log (non-blocking)
    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        &cfg.database,
        &format!("Initialized with roster {}", roster.path().display()),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rattendance initialization completed!");
    Ok(())
}

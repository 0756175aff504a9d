use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing overwatcher…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("overwatcher initialization completed!");
    Ok(())
}

pub mod config;
pub mod init;
pub mod log;
pub mod query;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;
pub mod update;

use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::worklog::WorkLog;
use crate::ui::messages::warning;
use crate::utils::time::format_hour;

/// Run one reconciliation inside a write transaction and record it in the
/// audit log. Nothing is committed if `op` fails.
pub(crate) fn reconcile_in_tx<F>(cfg: &Config, operation: &str, op: F) -> AppResult<WorkLog>
where
    F: FnOnce(&SqliteStore) -> AppResult<WorkLog>,
{
    let mut pool = DbPool::new(&cfg.database)?;
    let tx = pool.write_tx()?;

    let log = op(&SqliteStore::new(&tx))?;

    // Audit logging is best effort.
    if let Err(e) = ttlog(&tx, operation, &log.day().to_string(), &describe(&log)) {
        warning(format!("Failed to write internal log: {e}"));
    }

    tx.commit()?;
    Ok(log)
}

fn describe(log: &WorkLog) -> String {
    let mut s = format!("enter {}", format_hour(&log.enter()));
    if log.has_left() {
        s.push_str(&format!(", leave {}", format_hour(&log.leave())));
    }
    if !log.breaks().is_zero() {
        s.push_str(&format!(", breaks {}m", log.breaks().num_minutes()));
    }
    if !log.overtime_reason().is_empty() {
        s.push_str(&format!(", reason \"{}\"", log.overtime_reason()));
    }
    s
}

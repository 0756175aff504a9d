use crate::cli::commands::reconcile_in_tx;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::reconcile::ReconcileLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_day;
use crate::utils::time::format_hour;

pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let log = reconcile_in_tx(cfg, "start", |store| ReconcileLogic::start(store, clock))?;

    success(format!(
        "Work started at {} on {}.",
        format_hour(&log.enter()),
        format_day(&log.day())
    ));
    Ok(())
}

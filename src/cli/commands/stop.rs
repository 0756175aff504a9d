use crate::cli::commands::reconcile_in_tx;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::reconcile::ReconcileLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::format_duration;
use crate::utils::time::format_hour;

pub fn handle(cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    let log = reconcile_in_tx(cfg, "stop", |store| ReconcileLogic::stop(store, clock))?;

    success(format!(
        "Work stopped at {} ({} → {}, net {}).",
        format_hour(&log.leave()),
        format_hour(&log.enter()),
        format_hour(&log.leave()),
        format_duration(log.total_time(), false)
    ));
    Ok(())
}

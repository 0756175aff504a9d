use crate::cli::commands::reconcile_in_tx;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::reconcile::{BreakChange, ReconcileLogic, WorkLogUpdate};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{format_day, parse_day_or};
use crate::utils::time::{parse_optional_duration, parse_optional_hour_on};

/// Update a day's worklog with the given optional fields.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Update {
        day,
        enter,
        leave,
        breaks,
        add_break,
        reason,
    } = cmd
    {
        //
        // 1. Resolve the target day
        //
        let d = parse_day_or(day.as_ref(), clock.today())?;

        //
        // 2. Parse every field before touching the database
        //
        let breaks = match (
            parse_optional_duration(breaks.as_ref())?,
            parse_optional_duration(add_break.as_ref())?,
        ) {
            (Some(set), _) => Some(BreakChange::Set(set)),
            (None, Some(add)) => Some(BreakChange::Add(add)),
            (None, None) => None,
        };

        let update = WorkLogUpdate {
            enter: parse_optional_hour_on(d, enter.as_ref())?,
            leave: parse_optional_hour_on(d, leave.as_ref())?,
            breaks,
            reason: reason.clone(),
        };

        //
        // 3. Reconcile
        //
        reconcile_in_tx(cfg, "update", |store| {
            ReconcileLogic::update(store, clock, d, update)
        })?;

        success(format!("Worklog for {} updated.", format_day(&d)));
    }

    Ok(())
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::utils::date::{format_day, parse_day_or};
use crate::utils::formatting::format_duration;
use crate::utils::time::format_hour;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Status { day } = cmd {
        let d = parse_day_or(day.as_ref(), clock.today())?;
        let workday = cfg.workday()?;

        let pool = DbPool::new(&cfg.database)?;
        let Some(report) = ReportLogic::day(&SqliteStore::new(&pool.conn), d, workday)? else {
            println!("No worklog for {}", format_day(&d));
            return Ok(());
        };

        let mut log = report.worklog.clone();

        // Still at work today: measure up to now without storing anything.
        let ongoing =
            !log.has_left() && d == clock.today() && log.set_leave_time(clock.now()).is_ok();

        println!("Day:\t\t{}", format_day(&d));
        println!("Start:\t\t{}", format_hour(&log.enter()));
        if ongoing {
            println!("Leave:\t\t(still working)");
        } else if report.worklog.has_left() {
            println!("Leave:\t\t{}", format_hour(&log.leave()));
        } else {
            println!("Leave:\t\t--");
        }
        println!("Worktime:\t{}", format_duration(log.span(), false));
        println!("Breaks:\t\t{}", format_duration(log.breaks(), false));
        println!("Net worktime:\t{}", format_duration(log.total_time(), false));

        match log.overtime(workday) {
            Some(ot) => {
                println!(
                    "Overtime:\t{} (since {})",
                    format_duration(ot.duration, false),
                    format_hour(&ot.start)
                );
                if !ot.reason.is_empty() {
                    println!("Reason:\t\t{}", ot.reason);
                }
            }
            None => println!("Overtime:\t--"),
        }
    }

    Ok(())
}

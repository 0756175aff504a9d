use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::report::{DayReport, ReportLogic};
use crate::db::pool::DbPool;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_day, month_bounds, parse_day_or, week_bounds};
use crate::utils::formatting::{format_duration, format_optional_duration};
use crate::utils::table::Table;
use crate::utils::time::format_hour;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Query {
        from,
        to,
        week,
        month,
    } = cmd
    {
        let today = clock.today();
        let (start, end) = if *week {
            week_bounds(today)
        } else if *month {
            month_bounds(today)
        } else {
            let end = parse_day_or(to.as_ref(), today)?;
            let start = parse_day_or(from.as_ref(), end)?;
            (start, end)
        };

        let workday = cfg.workday()?;
        let pool = DbPool::new(&cfg.database)?;
        let reports = ReportLogic::collect(&SqliteStore::new(&pool.conn), start, end, workday)?;

        print_reports(start, end, &reports);
    }

    Ok(())
}

fn print_reports(start: NaiveDate, end: NaiveDate, reports: &[DayReport]) {
    if reports.is_empty() {
        info(format!(
            "No worklogs between {} and {}.",
            format_day(&start),
            format_day(&end)
        ));
        return;
    }

    header(format!("{} → {}", format_day(&start), format_day(&end)));

    let mut table = Table::new(["Day", "Enter", "Leave", "Breaks", "Total", "Overtime", "Reason"]);
    for r in reports {
        let log = &r.worklog;
        table.add_row(vec![
            format_day(&log.day()),
            format_hour(&log.enter()),
            if log.has_left() {
                format_hour(&log.leave())
            } else {
                "--".to_string()
            },
            format_duration(log.breaks(), true),
            format_duration(r.total, true),
            format_optional_duration(r.overtime.as_ref().map(|o| o.duration), true),
            log.overtime_reason().to_string(),
        ]);
    }
    print!("{}", table.render());

    let summary = ReportLogic::summarize(reports);
    println!(
        "\n{} day(s), total {}, overtime {}",
        summary.days,
        format_duration(summary.total, false),
        format_duration(summary.overtime, false)
    );
}

//! Read-only aggregation of worklogs over a date range.

use crate::db::store::WorkLogStore;
use crate::errors::AppResult;
use crate::models::worklog::{Overtime, WorkLog};
use chrono::{Duration, NaiveDate};

/// One stored day together with its derived durations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayReport {
    pub worklog: WorkLog,
    pub total: Duration,
    pub overtime: Option<Overtime>,
}

impl DayReport {
    pub fn new(worklog: WorkLog, workday: Duration) -> Self {
        let total = worklog.total_time();
        let overtime = worklog.overtime(workday);
        Self {
            worklog,
            total,
            overtime,
        }
    }

    pub fn overtime_duration(&self) -> Duration {
        self.overtime
            .as_ref()
            .map(|o| o.duration)
            .unwrap_or_else(Duration::zero)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSummary {
    pub days: usize,
    pub total: Duration,
    pub overtime: Duration,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Every day in `[from, to]`, ascending. An inverted or empty range is not an error.
    pub fn collect(
        store: &impl WorkLogStore,
        from: NaiveDate,
        to: NaiveDate,
        workday: Duration,
    ) -> AppResult<Vec<DayReport>> {
        Ok(store
            .load_range(from, to)?
            .into_iter()
            .map(|log| DayReport::new(log, workday))
            .collect())
    }

    /// Single-day lookup; more than one stored record is an integrity violation.
    pub fn day(
        store: &impl WorkLogStore,
        day: NaiveDate,
        workday: Duration,
    ) -> AppResult<Option<DayReport>> {
        Ok(store
            .load_by_day(day)?
            .map(|log| DayReport::new(log, workday)))
    }

    pub fn summarize(reports: &[DayReport]) -> RangeSummary {
        reports.iter().fold(
            RangeSummary {
                days: 0,
                total: Duration::zero(),
                overtime: Duration::zero(),
            },
            |acc, r| RangeSummary {
                days: acc.days + 1,
                total: acc.total + r.total,
                overtime: acc.overtime + r.overtime_duration(),
            },
        )
    }
}

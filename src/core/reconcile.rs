//! Load-merge-validate-store cycle behind `start`, `stop` and `update`.

use crate::core::clock::Clock;
use crate::db::store::WorkLogStore;
use crate::errors::{AppError, AppResult};
use crate::models::worklog::WorkLog;
use chrono::{DateTime, Duration, Local, NaiveDate};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakChange {
    /// Replace the cumulative break time.
    Set(Duration),
    /// Add to the cumulative break time.
    Add(Duration),
}

/// Partial update for one day. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkLogUpdate {
    pub enter: Option<DateTime<Local>>,
    pub leave: Option<DateTime<Local>>,
    pub breaks: Option<BreakChange>,
    pub reason: Option<String>,
}

impl WorkLogUpdate {
    pub fn is_empty(&self) -> bool {
        self.enter.is_none()
            && self.leave.is_none()
            && self.breaks.is_none()
            && self.reason.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnMissing {
    Create,
    Reject,
}

/// High-level business logic for the worklog mutating commands.
pub struct ReconcileLogic;

impl ReconcileLogic {
    /// `update` with enter = now on today's record.
    pub fn start(store: &impl WorkLogStore, clock: &dyn Clock) -> AppResult<WorkLog> {
        let now = clock.now();
        let update = WorkLogUpdate {
            enter: Some(now),
            ..Default::default()
        };
        Self::reconcile(store, clock, now.date_naive(), update, OnMissing::Create)
    }

    /// `update` with leave = now; today's record must already exist.
    pub fn stop(store: &impl WorkLogStore, clock: &dyn Clock) -> AppResult<WorkLog> {
        let now = clock.now();
        let update = WorkLogUpdate {
            leave: Some(now),
            ..Default::default()
        };
        Self::reconcile(store, clock, now.date_naive(), update, OnMissing::Reject)
    }

    pub fn update(
        store: &impl WorkLogStore,
        clock: &dyn Clock,
        day: NaiveDate,
        update: WorkLogUpdate,
    ) -> AppResult<WorkLog> {
        if update.is_empty() {
            return Err(AppError::NothingToDo(
                "specify at least --enter, --leave, --break, --add-break or --reason".into(),
            ));
        }
        Self::reconcile(store, clock, day, update, OnMissing::Create)
    }

    /// Apply the fields in fixed order: reason, breaks, enter, leave.
    /// On error `log` may be partially modified; callers must discard it.
    pub fn apply(log: &mut WorkLog, update: WorkLogUpdate) -> AppResult<()> {
        if let Some(reason) = update.reason {
            log.set_overtime_reason(reason);
        }

        match update.breaks {
            Some(BreakChange::Set(d)) => log.set_breaks(d)?,
            Some(BreakChange::Add(d)) => log.add_break(d)?,
            None => {}
        }

        if let Some(enter) = update.enter {
            log.set_enter_time(enter)?;
        }

        if let Some(leave) = update.leave {
            log.set_leave_time(leave)?;
        }

        Ok(())
    }

    /// New record for `day`, anchored on the incoming leave (or enter) time so
    /// a backfill does not depend on the current time of day.
    fn fresh(clock: &dyn Clock, day: NaiveDate, update: &WorkLogUpdate) -> AppResult<WorkLog> {
        let anchor = update
            .leave
            .or(update.enter)
            .filter(|t| t.date_naive() == day);
        match anchor {
            Some(t) => Ok(WorkLog::new(t)),
            None => Ok(WorkLog::new(clock.now_on(day)?)),
        }
    }

    fn reconcile(
        store: &impl WorkLogStore,
        clock: &dyn Clock,
        day: NaiveDate,
        update: WorkLogUpdate,
        on_missing: OnMissing,
    ) -> AppResult<WorkLog> {
        let mut log = match store.load_by_day(day)? {
            Some(existing) => existing,
            None if on_missing == OnMissing::Reject => return Err(AppError::NoWorkLog(day)),
            None => {
                debug!(%day, "no worklog yet, creating one");
                Self::fresh(clock, day, &update)?
            }
        };

        Self::apply(&mut log, update)?;

        store.store(&log)?;
        info!(
            %day,
            enter = %log.enter(),
            leave = %log.leave(),
            breaks_secs = log.breaks().num_seconds(),
            "worklog stored"
        );

        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::db::pool::DbPool;
    use crate::db::queries::count_worklogs;
    use crate::db::store::SqliteStore;
    use chrono::TimeZone;

    fn at(day: u32, h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, day, h, m, 0).unwrap()
    }

    fn clock(day: u32, h: u32, m: u32) -> FixedClock {
        FixedClock(at(day, h, m))
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn start_creates_todays_record() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        let log = ReconcileLogic::start(&store, &clock(4, 9, 0)).unwrap();

        assert_eq!(log.enter(), at(4, 9, 0));
        assert_eq!(log.leave(), at(4, 9, 0));
        assert_eq!(store.load_by_day(d(4)).unwrap(), Some(log));
    }

    #[test]
    fn start_then_stop_sets_leave() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        ReconcileLogic::start(&store, &clock(4, 9, 0)).unwrap();
        let log = ReconcileLogic::stop(&store, &clock(4, 17, 30)).unwrap();

        assert_eq!(log.enter(), at(4, 9, 0));
        assert_eq!(log.leave(), at(4, 17, 30));
        assert_eq!(log.total_time(), Duration::minutes(8 * 60 + 30));
    }

    #[test]
    fn stop_can_be_repeated_later_the_same_day() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        ReconcileLogic::start(&store, &clock(4, 9, 0)).unwrap();
        ReconcileLogic::stop(&store, &clock(4, 12, 0)).unwrap();
        let log = ReconcileLogic::stop(&store, &clock(4, 18, 0)).unwrap();

        assert_eq!(log.leave(), at(4, 18, 0));
        assert_eq!(count_worklogs(&pool.conn).unwrap(), 1);
    }

    #[test]
    fn stop_without_start_is_not_found_and_writes_nothing() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        let err = ReconcileLogic::stop(&store, &clock(4, 17, 0)).unwrap_err();

        assert!(matches!(err, AppError::NoWorkLog(day) if day == d(4)));
        assert_eq!(count_worklogs(&pool.conn).unwrap(), 0);
    }

    #[test]
    fn second_start_after_work_began_is_rejected() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        ReconcileLogic::start(&store, &clock(4, 9, 0)).unwrap();
        let err = ReconcileLogic::start(&store, &clock(4, 13, 0)).unwrap_err();

        assert!(matches!(err, AppError::EnterAfterLeave { .. }));
        assert_eq!(
            store.load_by_day(d(4)).unwrap().unwrap().enter(),
            at(4, 9, 0)
        );
    }

    #[test]
    fn update_merges_reason_and_breaks() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);
        let c = clock(4, 18, 0);

        ReconcileLogic::update(
            &store,
            &c,
            d(4),
            WorkLogUpdate {
                reason: Some("R".into()),
                ..Default::default()
            },
        )
        .unwrap();
        ReconcileLogic::update(
            &store,
            &c,
            d(4),
            WorkLogUpdate {
                breaks: Some(BreakChange::Set(Duration::hours(1))),
                ..Default::default()
            },
        )
        .unwrap();

        let log = store.load_by_day(d(4)).unwrap().unwrap();
        assert_eq!(log.overtime_reason(), "R");
        assert_eq!(log.breaks(), Duration::hours(1));
    }

    #[test]
    fn add_break_accumulates_across_updates() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);
        let c = clock(4, 18, 0);
        let add = |mins| WorkLogUpdate {
            breaks: Some(BreakChange::Add(Duration::minutes(mins))),
            ..Default::default()
        };

        ReconcileLogic::update(&store, &c, d(4), add(15)).unwrap();
        let log = ReconcileLogic::update(&store, &c, d(4), add(20)).unwrap();

        assert_eq!(log.breaks(), Duration::minutes(35));
    }

    #[test]
    fn update_on_past_day_creates_record_on_that_day() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        let log = ReconcileLogic::update(
            &store,
            &clock(10, 14, 0),
            d(2),
            WorkLogUpdate {
                enter: Some(at(2, 9, 0)),
                leave: Some(at(2, 17, 0)),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(log.day(), d(2));
        assert_eq!(log.enter(), at(2, 9, 0));
        assert_eq!(log.leave(), at(2, 17, 0));
        assert!(store.load_by_day(d(10)).unwrap().is_none());
    }

    #[test]
    fn failed_update_persists_nothing() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);
        let c = clock(4, 18, 0);

        ReconcileLogic::update(
            &store,
            &c,
            d(4),
            WorkLogUpdate {
                enter: Some(at(4, 9, 0)),
                reason: Some("original".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let before = store.load_by_day(d(4)).unwrap();

        // Reason and breaks are applied first, then the leave setter fails.
        let err = ReconcileLogic::update(
            &store,
            &c,
            d(4),
            WorkLogUpdate {
                leave: Some(at(4, 8, 0)),
                reason: Some("changed".into()),
                breaks: Some(BreakChange::Set(Duration::minutes(30))),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, AppError::LeaveBeforeEnter { .. }));
        assert_eq!(store.load_by_day(d(4)).unwrap(), before);
    }

    #[test]
    fn failed_update_on_missing_day_creates_no_row() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        let err = ReconcileLogic::update(
            &store,
            &clock(4, 10, 0),
            d(4),
            WorkLogUpdate {
                enter: Some(at(4, 11, 0)),
                leave: Some(at(4, 10, 30)),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, AppError::EnterAfterLeave { .. }));
        assert_eq!(count_worklogs(&pool.conn).unwrap(), 0);
    }

    #[test]
    fn backfill_does_not_depend_on_time_of_day() {
        for hour in [0, 7, 12, 23] {
            let pool = DbPool::in_memory().unwrap();
            let store = SqliteStore::new(&pool.conn);

            let log = ReconcileLogic::update(
                &store,
                &clock(10, hour, 0),
                d(2),
                WorkLogUpdate {
                    enter: Some(at(2, 9, 0)),
                    leave: Some(at(2, 17, 0)),
                    ..Default::default()
                },
            )
            .unwrap();

            assert_eq!(log.enter(), at(2, 9, 0));
            assert_eq!(log.leave(), at(2, 17, 0));
        }
    }

    #[test]
    fn fresh_record_with_only_enter_has_not_left() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        let log = ReconcileLogic::update(
            &store,
            &clock(10, 7, 0),
            d(2),
            WorkLogUpdate {
                enter: Some(at(2, 9, 0)),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(log.enter(), at(2, 9, 0));
        assert!(!log.has_left());
    }

    #[test]
    fn empty_update_is_rejected() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);

        let err =
            ReconcileLogic::update(&store, &clock(4, 10, 0), d(4), WorkLogUpdate::default())
                .unwrap_err();

        assert!(matches!(err, AppError::NothingToDo(_)));
        assert_eq!(count_worklogs(&pool.conn).unwrap(), 0);
    }

    #[test]
    fn rerunning_an_update_is_idempotent() {
        let pool = DbPool::in_memory().unwrap();
        let store = SqliteStore::new(&pool.conn);
        let c = clock(4, 18, 0);
        let upd = WorkLogUpdate {
            enter: Some(at(4, 9, 0)),
            leave: Some(at(4, 17, 0)),
            breaks: Some(BreakChange::Set(Duration::minutes(30))),
            reason: Some("same".into()),
        };

        let first = ReconcileLogic::update(&store, &c, d(4), upd.clone()).unwrap();
        let second = ReconcileLogic::update(&store, &c, d(4), upd).unwrap();

        assert_eq!(first, second);
        assert_eq!(count_worklogs(&pool.conn).unwrap(), 1);
    }
}

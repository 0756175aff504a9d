//! The per-day attendance record.
//!
//! A `WorkLog` guards its own consistency: fields are private and every
//! mutation of `enter`/`leave` goes through a validated setter.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkLog {
    enter: DateTime<Local>,
    leave: DateTime<Local>,
    breaks: Duration,
    overtime_reason: String,
}

/// Portion of a day's net time exceeding the expected workday length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overtime {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub duration: Duration,
    pub reason: String,
}

impl WorkLog {
    /// Fresh record: enter = leave = `now`, no breaks, no reason.
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            enter: now,
            leave: now,
            breaks: Duration::zero(),
            overtime_reason: String::new(),
        }
    }

    /// Rebuild a stored record. Unlike the setters, `leave == enter` is accepted
    /// (work not ended yet).
    pub fn restore(
        enter: DateTime<Local>,
        leave: DateTime<Local>,
        breaks: Duration,
        overtime_reason: String,
    ) -> AppResult<Self> {
        let day = enter.date_naive().to_string();

        if leave.date_naive() != enter.date_naive() {
            return Err(AppError::CorruptRecord(
                day,
                format!("leave {leave} is not on the same day as enter {enter}"),
            ));
        }
        if leave < enter {
            return Err(AppError::CorruptRecord(
                day,
                format!("leave {leave} precedes enter {enter}"),
            ));
        }
        if breaks < Duration::zero() {
            return Err(AppError::CorruptRecord(day, "negative breaks".into()));
        }

        Ok(Self {
            enter,
            leave,
            breaks,
            overtime_reason,
        })
    }

    /// Day key: local calendar date of `enter`.
    pub fn day(&self) -> NaiveDate {
        self.enter.date_naive()
    }

    pub fn enter(&self) -> DateTime<Local> {
        self.enter
    }

    pub fn leave(&self) -> DateTime<Local> {
        self.leave
    }

    pub fn breaks(&self) -> Duration {
        self.breaks
    }

    pub fn overtime_reason(&self) -> &str {
        &self.overtime_reason
    }

    /// False while `leave` still equals `enter`.
    pub fn has_left(&self) -> bool {
        self.leave != self.enter
    }

    /// Move `enter`. Must stay on the day of `leave` and strictly before it.
    /// Re-asserting the current value is a no-op.
    pub fn set_enter_time(&mut self, t: DateTime<Local>) -> AppResult<()> {
        if t == self.enter {
            return Ok(());
        }
        if t.date_naive() != self.leave.date_naive() || t >= self.leave {
            return Err(AppError::EnterAfterLeave {
                enter: t,
                leave: self.leave,
            });
        }
        self.enter = t;
        Ok(())
    }

    /// Move `leave`. Must stay on the day of `enter` and strictly after it.
    /// Re-asserting the current value is a no-op.
    pub fn set_leave_time(&mut self, t: DateTime<Local>) -> AppResult<()> {
        if t == self.leave {
            return Ok(());
        }
        if t.date_naive() != self.enter.date_naive() || t <= self.enter {
            return Err(AppError::LeaveBeforeEnter {
                enter: self.enter,
                leave: t,
            });
        }
        self.leave = t;
        Ok(())
    }

    /// Overwrite the cumulative break time. Size is not checked against the
    /// enter/leave span; `total_time` clamps instead.
    pub fn set_breaks(&mut self, breaks: Duration) -> AppResult<()> {
        if breaks < Duration::zero() {
            return Err(AppError::NegativeBreaks);
        }
        self.breaks = breaks;
        Ok(())
    }

    pub fn add_break(&mut self, extra: Duration) -> AppResult<()> {
        let total = self.breaks.checked_add(&extra).ok_or_else(|| {
            AppError::InvalidDuration(format!(
                "{}ms + {}ms is out of range",
                self.breaks.num_milliseconds(),
                extra.num_milliseconds()
            ))
        })?;
        self.set_breaks(total)
    }

    pub fn set_overtime_reason(&mut self, reason: impl Into<String>) {
        self.overtime_reason = reason.into();
    }

    /// Elapsed span between enter and leave, breaks included.
    pub fn span(&self) -> Duration {
        self.leave - self.enter
    }

    /// Net worked time: `max(0, leave - enter - breaks)`.
    pub fn total_time(&self) -> Duration {
        let net = self.span() - self.breaks;
        if net > Duration::zero() {
            net
        } else {
            Duration::zero()
        }
    }

    pub fn overtime(&self, workday: Duration) -> Option<Overtime> {
        let total = self.total_time();
        if total <= workday {
            return None;
        }

        Some(Overtime {
            start: self.enter + workday + self.breaks,
            end: self.leave,
            duration: total - workday,
            reason: self.overtime_reason.clone(),
        })
    }
}

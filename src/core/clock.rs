use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::errors::{AppError, AppResult};

/// Source of "now" for default enter/leave values and the target day.
/// Injected into the command handlers so tests can pin time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> chrono::NaiveDate {
        self.now().date_naive()
    }

    /// Current local time of day projected onto `day`.
    fn now_on(&self, day: chrono::NaiveDate) -> AppResult<DateTime<Local>> {
        let now = self.now();
        if now.date_naive() == day {
            return Ok(now);
        }
        local_datetime(day.and_time(now.time()))
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Parse `YYYY-MM-DDTHH:MM[:SS]` as local time.
    pub fn parse(s: &str) -> AppResult<Self> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        Ok(Self(local_datetime(naive)?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Resolve a naive local timestamp, rejecting instants that do not exist
/// (or are ambiguous) because of a DST transition.
pub fn local_datetime(naive: NaiveDateTime) -> AppResult<DateTime<Local>> {
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| AppError::InvalidTime(naive.to_string()))
}

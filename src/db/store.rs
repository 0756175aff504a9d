//! Persistence port for worklogs and its SQLite adapter.

use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::worklog::WorkLog;
use chrono::NaiveDate;
use rusqlite::Connection;

pub trait WorkLogStore {
    /// Records with `from <= day <= to`, ascending. `from > to` yields nothing.
    fn load_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkLog>>;

    /// Insert or overwrite the record keyed by its day.
    fn store(&self, log: &WorkLog) -> AppResult<()>;

    /// The record for `day`, if any. More than one record for a single day is
    /// a broken storage invariant and is reported as `AppError::Integrity`.
    fn load_by_day(&self, day: NaiveDate) -> AppResult<Option<WorkLog>> {
        let mut rows = self.load_range(day, day)?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(AppError::Integrity(format!(
                "{n} worklogs stored for {day}, expected at most one"
            ))),
        }
    }
}

/// Store backed by a SQLite connection, or a transaction (which derefs to one).
pub struct SqliteStore<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl WorkLogStore for SqliteStore<'_> {
    fn load_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkLog>> {
        queries::load_range(self.conn, from, to)
    }

    fn store(&self, log: &WorkLog) -> AppResult<()> {
        queries::upsert_worklog(self.conn, log)
    }
}

//! Unified application error type.
//! Every module (db, core, cli, utils) returns AppError so that the
//! dispatcher can report failures in one place.

use crate::utils::date::format_day;
use chrono::{DateTime, Local, NaiveDate};
use std::io;
use thiserror::Error;

/// Exit code used for internal-consistency violations (sysexits EX_SOFTWARE).
pub const EXIT_INTEGRITY: i32 = 70;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// A single-day lookup produced more than one record.
    #[error("Internal consistency violation: {0}")]
    Integrity(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-Mon-DD, e.g. 2024-Jan-05)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected 12-hour time, e.g. 9:30AM)")]
    InvalidTime(String),

    #[error("Invalid duration: {0} (expected e.g. 2h30m, 45m, 1.5h)")]
    InvalidDuration(String),

    // ---------------------------
    // WorkLog validation
    // ---------------------------
    #[error("Invalid enter time {enter}: must be before leave time {leave} on the same day")]
    EnterAfterLeave {
        enter: DateTime<Local>,
        leave: DateTime<Local>,
    },

    #[error("Invalid leave time {leave}: must be after enter time {enter} on the same day")]
    LeaveBeforeEnter {
        enter: DateTime<Local>,
        leave: DateTime<Local>,
    },

    #[error("Break duration cannot be negative")]
    NegativeBreaks,

    #[error("Stored worklog for {0} is inconsistent: {1}")]
    CorruptRecord(String, String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No worklog for {}", format_day(.0))]
    NoWorkLog(NaiveDate),

    #[error("Nothing to do: {0}")]
    NothingToDo(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Report / export errors
    // ---------------------------
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Template error: {0}")]
    Template(String),
}

impl AppError {
    /// True for errors that signal a broken storage invariant rather than a user mistake.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, AppError::Integrity(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_integrity_violation() {
            EXIT_INTEGRITY
        } else {
            1
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

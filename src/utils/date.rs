use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

/// Display/input format for days: `2024-Jan-05`.
pub const DAY_FORMAT: &str = "%Y-%b-%d";

/// Parse `YYYY-Mon-DD` (month name case-insensitive) or ISO `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, DAY_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(t, "%Y-%m-%d"))
        .ok()
}

pub fn parse_day_or(input: Option<&String>, default: NaiveDate) -> AppResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(default),
    }
}

pub fn format_day(d: &NaiveDate) -> String {
    d.format(DAY_FORMAT).to_string()
}

/// Monday..=Sunday of the ISO week containing `day`.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = day - Duration::days(i64::from(day.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(6))
}

/// First..=last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = day.with_day(1).unwrap_or(day);
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_first.and_then(|d| d.pred_opt()).unwrap_or(first);
    (first, last)
}

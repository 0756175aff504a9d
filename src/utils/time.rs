//! Time utilities: parsing hours, break durations and combining them with a day.
//! All string parsing of times lives here; the core only sees chrono types.

use crate::core::clock::local_datetime;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// 12-hour formats first; 24-hour `HH:MM` is accepted as a fallback.
const HOUR_FORMATS: [&str; 5] = ["%I:%M%p", "%I:%M %p", "%I:%M:%S%p", "%I:%M:%S %p", "%H:%M"];

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\d+(?:\.\d+)?(?:h|ms|m|s))+$").expect("duration pattern is valid")
});

static DURATION_PART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)(h|ms|m|s)").expect("duration part pattern is valid")
});

pub fn parse_hour(s: &str) -> Option<NaiveTime> {
    let t = s.trim();
    HOUR_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(t, fmt).ok())
}

/// Parse a Go-style duration: `2h30m`, `45m`, `1.5h`, `90s`, `250ms`, `0`.
pub fn parse_duration(s: &str) -> AppResult<Duration> {
    let t = s.trim();
    if t == "0" {
        return Ok(Duration::zero());
    }
    if !DURATION_RE.is_match(t) {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let mut total_ms = 0f64;
    for cap in DURATION_PART_RE.captures_iter(t) {
        let value: f64 = cap[1]
            .parse()
            .map_err(|_| AppError::InvalidDuration(s.to_string()))?;
        let unit_ms = match &cap[2] {
            "h" => 3_600_000.0,
            "m" => 60_000.0,
            "s" => 1_000.0,
            _ => 1.0,
        };
        total_ms += value * unit_ms;
    }

    let total_ms = total_ms.round();
    if !total_ms.is_finite() || total_ms > Duration::MAX.num_milliseconds() as f64 {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    Ok(Duration::milliseconds(total_ms as i64))
}

/// Combine a day and an hour string into a local timestamp.
pub fn parse_hour_on(day: NaiveDate, s: &str) -> AppResult<DateTime<Local>> {
    let t = parse_hour(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    local_datetime(day.and_time(t))
}

pub fn parse_optional_hour_on(
    day: NaiveDate,
    input: Option<&String>,
) -> AppResult<Option<DateTime<Local>>> {
    input.map(|s| parse_hour_on(day, s)).transpose()
}

pub fn parse_optional_duration(input: Option<&String>) -> AppResult<Option<Duration>> {
    input.map(|s| parse_duration(s)).transpose()
}

/// `09:30AM` style rendering, matching the accepted input format.
pub fn format_hour(dt: &DateTime<Local>) -> String {
    dt.format("%I:%M%p").to_string()
}

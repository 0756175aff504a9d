use crate::errors::{AppError, AppResult};
use crate::models::worklog::WorkLog;
use chrono::{DateTime, Duration, Local, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

const DAY_FMT: &str = "%Y-%m-%d";

fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FMT).to_string()
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_timestamp(col: usize, raw: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(col, AppError::InvalidTime(raw.to_string())))
}

pub fn map_row(row: &Row) -> Result<WorkLog> {
    let day_str: String = row.get("day")?;
    let enter_str: String = row.get("enter_at")?;
    let leave_str: String = row.get("leave_at")?;
    let breaks_ms: i64 = row.get("breaks_ms")?;
    let reason: String = row.get("reason")?;

    let enter = parse_timestamp(1, &enter_str)?;
    let leave = parse_timestamp(2, &leave_str)?;

    let log = WorkLog::restore(enter, leave, Duration::milliseconds(breaks_ms), reason)
        .map_err(|e| conversion_error(0, e))?;

    // The key is derived from `enter` on write; a mismatch means the row was
    // written under another time zone or edited by hand.
    if day_key(log.day()) != day_str {
        return Err(conversion_error(
            0,
            AppError::CorruptRecord(
                day_str,
                format!("enter {enter_str} does not fall on the row's day"),
            ),
        ));
    }

    Ok(log)
}

/// All rows stored under `day`. The primary key keeps this at most one row;
/// callers still check, see `WorkLogStore::load_by_day`.
pub fn load_rows_by_day(conn: &Connection, day: NaiveDate) -> AppResult<Vec<WorkLog>> {
    load_range(conn, day, day)
}

/// Rows with `from <= day <= to`, ascending by day.
pub fn load_range(conn: &Connection, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<WorkLog>> {
    if from > to {
        return Ok(Vec::new());
    }

    let mut stmt = conn.prepare_cached(
        "SELECT day, enter_at, leave_at, breaks_ms, reason
         FROM worklogs
         WHERE day BETWEEN ?1 AND ?2
         ORDER BY day ASC",
    )?;

    let rows = stmt.query_map(params![day_key(from), day_key(to)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert or overwrite the row for the record's day.
pub fn upsert_worklog(conn: &Connection, log: &WorkLog) -> AppResult<()> {
    conn.execute(
        "INSERT INTO worklogs (day, enter_at, leave_at, breaks_ms, reason)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(day) DO UPDATE SET
             enter_at  = excluded.enter_at,
             leave_at  = excluded.leave_at,
             breaks_ms = excluded.breaks_ms,
             reason    = excluded.reason",
        params![
            day_key(log.day()),
            log.enter().to_rfc3339(),
            log.leave().to_rfc3339(),
            log.breaks().num_milliseconds(),
            log.overtime_reason(),
        ],
    )?;
    Ok(())
}

pub fn count_worklogs(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM worklogs", [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use chrono::TimeZone;

    fn conn() -> Connection {
        let c = Connection::open_in_memory().unwrap();
        init_db(&c).unwrap();
        c
    }

    fn log_on(day: u32, enter_h: u32, leave_h: u32) -> WorkLog {
        let mut log = WorkLog::new(Local.with_ymd_and_hms(2024, 2, day, leave_h, 0, 0).unwrap());
        log.set_enter_time(Local.with_ymd_and_hms(2024, 2, day, enter_h, 0, 0).unwrap())
            .unwrap();
        log
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap()
    }

    #[test]
    fn upsert_then_load_returns_same_record() {
        let c = conn();
        let mut log = log_on(3, 9, 17);
        log.set_breaks(Duration::minutes(45)).unwrap();
        log.set_overtime_reason("deploy");

        upsert_worklog(&c, &log).unwrap();

        let rows = load_rows_by_day(&c, d(3)).unwrap();
        assert_eq!(rows, vec![log]);
    }

    #[test]
    fn upsert_overwrites_existing_day() {
        let c = conn();
        upsert_worklog(&c, &log_on(3, 9, 17)).unwrap();
        let later = log_on(3, 10, 19);
        upsert_worklog(&c, &later).unwrap();

        assert_eq!(count_worklogs(&c).unwrap(), 1);
        assert_eq!(load_rows_by_day(&c, d(3)).unwrap(), vec![later]);
    }

    #[test]
    fn range_is_inclusive_and_ordered() {
        let c = conn();
        for day in [7, 2, 5] {
            upsert_worklog(&c, &log_on(day, 9, 17)).unwrap();
        }

        let days: Vec<NaiveDate> = load_range(&c, d(2), d(5))
            .unwrap()
            .iter()
            .map(WorkLog::day)
            .collect();
        assert_eq!(days, vec![d(2), d(5)]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let c = conn();
        upsert_worklog(&c, &log_on(3, 9, 17)).unwrap();
        assert!(load_range(&c, d(5), d(1)).unwrap().is_empty());
    }

    #[test]
    fn row_with_mismatched_day_is_rejected() {
        let c = conn();
        upsert_worklog(&c, &log_on(3, 9, 17)).unwrap();
        c.execute("UPDATE worklogs SET day = '2024-02-04'", []).unwrap();

        assert!(load_rows_by_day(&c, d(4)).is_err());
    }
}

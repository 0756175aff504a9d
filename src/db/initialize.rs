use crate::errors::AppResult;
use rusqlite::Connection;

/// Canonical schema. One row per local calendar day in `worklogs`,
/// plus the internal audit `log` table.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS worklogs (
    day       TEXT PRIMARY KEY,
    enter_at  TEXT NOT NULL,
    leave_at  TEXT NOT NULL,
    breaks_ms INTEGER NOT NULL DEFAULT 0 CHECK(breaks_ms >= 0),
    reason    TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS log (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,
    operation TEXT NOT NULL,
    target    TEXT DEFAULT '',
    message   TEXT NOT NULL
);
"#;

/// Create the tables if they are missing. Safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

//! SQLite connection wrapper (lightweight for CLI usage).
//! Opened once per process run and handed to the command handlers.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use std::path::Path;
use tracing::debug;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn new(path: &str) -> AppResult<Self> {
        debug!(path, "opening database");
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Start a write transaction that takes the RESERVED lock immediately, so a
    /// concurrent invocation cannot interleave its own load/store pair.
    pub fn write_tx(&mut self) -> AppResult<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}

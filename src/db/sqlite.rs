//! SQLite-backed query client
//!
//! The connection is guarded by a mutex held for the duration of one
//! statement; lock poisoning surfaces as `ConnectionLost` rather than a
//! panic.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params_from_iter, Connection};

use super::client::{QueryClient, RowSet};
use super::errors::{QueryError, QueryResult};
use super::schema;
use super::value::SqlValue;

/// Query client over a single SQLite connection
pub struct SqliteClient {
    conn: Mutex<Connection>,
}

impl SqliteClient {
    /// Open (creating if needed) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> QueryResult<Self> {
        Self::configure(Connection::open(path)?)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> QueryResult<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> QueryResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Apply the table DDL; safe to call on every boot
    pub fn apply_schema(&self) -> QueryResult<()> {
        let conn = self.lock()?;
        conn.execute_batch(schema::DDL)?;
        Ok(())
    }

    fn lock(&self) -> QueryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| QueryError::ConnectionLost("connection mutex poisoned".to_string()))
    }
}

impl QueryClient for SqliteClient {
    fn fetch(&self, sql: &str, params: &[SqlValue]) -> QueryResult<RowSet> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;

        // Column names must be taken before the statement is iterated.
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows = Vec::new();
        let mut driver_rows = stmt.query(params_from_iter(params.iter()))?;
        while let Some(row) = driver_rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                values.push(SqlValue::from(row.get_ref(idx)?));
            }
            rows.push(values);
        }

        Ok(RowSet { columns, rows })
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> QueryResult<u64> {
        let conn = self.lock()?;
        let affected = conn.execute(sql, params_from_iter(params.iter()))?;
        Ok(affected as u64)
    }

    fn insert(&self, sql: &str, params: &[SqlValue]) -> QueryResult<i64> {
        let conn = self.lock()?;
        conn.execute(sql, params_from_iter(params.iter()))?;
        Ok(conn.last_insert_rowid())
    }
}

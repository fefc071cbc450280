//! # Database Client Seam
//!
//! The trait the domain stores program against. Implementations
//! resolve placeholders through the driver's binding mechanism;
//! callers hand over SQL text and values separately.

use super::errors::QueryResult;
use super::value::SqlValue;

/// Columns and rows exactly as the driver reported them
#[derive(Debug, Clone, PartialEq)]
pub struct RowSet {
    /// Ordered column names describing the result shape
    pub columns: Vec<String>,
    /// Row tuples, positionally aligned with `columns`
    pub rows: Vec<Vec<SqlValue>>,
}

impl RowSet {
    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Statement execution over bound parameters
pub trait QueryClient: Send + Sync {
    /// Run a reading statement, returning its column descriptor set and
    /// every row in driver order
    fn fetch(&self, sql: &str, params: &[SqlValue]) -> QueryResult<RowSet>;

    /// Run a mutating statement, returning the affected-row count
    fn execute(&self, sql: &str, params: &[SqlValue]) -> QueryResult<u64>;

    /// Run an INSERT, returning the id of the new row
    fn insert(&self, sql: &str, params: &[SqlValue]) -> QueryResult<i64>;
}

//! Row-to-record projection
//!
//! A pure transformation: no reordering, no filtering, no
//! deduplication. Record keys follow column order; JSON object order is
//! cosmetic and carries no semantic guarantee.

use serde_json::{Map, Value};

use crate::db::SqlValue;

use super::errors::{ProjectionError, ProjectionResult};

/// One row rendered as a name -> value mapping
pub type ProjectedRecord = Map<String, Value>;

/// Pairs every row positionally with `columns` to build one record per
/// row, preserving row order.
///
/// Every row's arity is checked against `columns` before any record is
/// built, so a mismatch yields no partial output.
pub fn project(
    columns: &[String],
    rows: Vec<Vec<SqlValue>>,
) -> ProjectionResult<Vec<ProjectedRecord>> {
    if columns.is_empty() {
        return Err(ProjectionError::NoColumns);
    }

    for (row_index, row) in rows.iter().enumerate() {
        if row.len() != columns.len() {
            return Err(ProjectionError::SchemaMismatch {
                row_index,
                expected: columns.len(),
                actual: row.len(),
            });
        }
    }

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = ProjectedRecord::new();
        for (name, value) in columns.iter().zip(row) {
            record.insert(name.clone(), Value::from(value));
        }
        records.push(record);
    }

    Ok(records)
}

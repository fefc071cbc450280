//! Projection error types

use thiserror::Error;

/// Result type for projection operations
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while pairing rows with a column descriptor set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// A row's arity differs from the column descriptor set
    #[error("row {row_index} carries {actual} values but the result shape has {expected} columns")]
    SchemaMismatch {
        row_index: usize,
        expected: usize,
        actual: usize,
    },

    /// The driver reported an empty column descriptor set
    #[error("result shape has no columns")]
    NoColumns,
}

//! Store error types

use thiserror::Error;

use crate::db::QueryError;
use crate::projection::ProjectionError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by store operations
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A single-entity lookup matched no rows, or a targeted mutation
    /// affected none
    #[error("no matching record")]
    NotFound,

    /// Propagated from the database client
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Propagated from result projection
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

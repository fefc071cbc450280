//! Database client error types

use thiserror::Error;

/// Result type for database operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Classification of a failed statement, used for HTTP status mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorKind {
    ConstraintViolation,
    ConnectionLost,
    Malformed,
    Other,
}

/// Error raised by the database client
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// A uniqueness, foreign key, or check constraint rejected the statement
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The connection is unusable (cannot open, busy, locked, corrupt)
    #[error("connection lost: {0}")]
    ConnectionLost(String),

    /// The statement itself is invalid
    #[error("malformed statement: {0}")]
    Malformed(String),

    /// Any other driver failure
    #[error("query failed: {0}")]
    Other(String),
}

impl QueryError {
    /// Returns the kind of this error
    pub fn kind(&self) -> QueryErrorKind {
        match self {
            QueryError::ConstraintViolation(_) => QueryErrorKind::ConstraintViolation,
            QueryError::ConnectionLost(_) => QueryErrorKind::ConnectionLost,
            QueryError::Malformed(_) => QueryErrorKind::Malformed,
            QueryError::Other(_) => QueryErrorKind::Other,
        }
    }
}

impl From<rusqlite::Error> for QueryError {
    fn from(e: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        match &e {
            rusqlite::Error::SqliteFailure(code, _) => match code.code {
                ErrorCode::ConstraintViolation => QueryError::ConstraintViolation(e.to_string()),
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::DatabaseCorrupt
                | ErrorCode::NotADatabase => QueryError::ConnectionLost(e.to_string()),
                // Generic SQLITE_ERROR covers bad SQL against a live schema
                ErrorCode::Unknown => QueryError::Malformed(e.to_string()),
                _ => QueryError::Other(e.to_string()),
            },
            rusqlite::Error::SqlInputError { .. }
            | rusqlite::Error::MultipleStatement
            | rusqlite::Error::InvalidParameterCount(_, _) => QueryError::Malformed(e.to_string()),
            _ => QueryError::Other(e.to_string()),
        }
    }
}

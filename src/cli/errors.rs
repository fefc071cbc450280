//! CLI-specific error types
//!
//! Every CLI error terminates the process with a non-zero exit.

use std::fmt;
use std::io;

use crate::db::QueryError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error
    IoError,
    /// Database open or schema error
    DatabaseError,
    /// HTTP server failed to serve
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "GAMESTORE_CLI_CONFIG_ERROR",
            Self::IoError => "GAMESTORE_CLI_IO_ERROR",
            Self::DatabaseError => "GAMESTORE_CLI_DATABASE_ERROR",
            Self::ServeFailed => "GAMESTORE_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Database error
    pub fn database_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::DatabaseError, msg)
    }

    /// Serve failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("JSON error: {}", e))
    }
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        Self::database_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code_and_message() {
        let err = CliError::config_error("missing file");
        let text = err.to_string();
        assert!(text.contains("GAMESTORE_CLI_CONFIG_ERROR"));
        assert!(text.contains("missing file"));
    }

    #[test]
    fn test_query_errors_become_database_errors() {
        let err: CliError = QueryError::Other("boom".to_string()).into();
        assert_eq!(err.code(), &CliErrorCode::DatabaseError);
    }
}

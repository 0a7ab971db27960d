//! Core error types for the Fundboard application.
//!
//! This module defines storage-agnostic error types. Transport and protocol
//! errors from the hosted store are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Every failure reported by the data store arrives as `Error::Database`.
/// Callers are not expected to recover from it locally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database request failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Storage-agnostic error type for requests against the data store.
///
/// Details are kept as strings so that no HTTP client types leak out of the
/// storage crate.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("Failed to reach data store: {0}")]
    ConnectionFailed(String),

    /// The store answered with an error status.
    #[error("Query rejected by data store ({}): {message}", .code.as_deref().unwrap_or("unknown"))]
    QueryFailed {
        /// HTTP status returned by the store.
        status: u16,
        /// Store-specific error code (for Postgres-backed stores, the SQLSTATE).
        code: Option<String>,
        message: String,
    },

    /// The store answered successfully but the body did not match the expected shape.
    #[error("Failed to decode data store response: {0}")]
    Decode(String),
}

impl DatabaseError {
    /// SQLSTATE for a unique constraint violation.
    pub const UNIQUE_VIOLATION: &'static str = "23505";
    /// SQLSTATE for a foreign key violation.
    pub const FOREIGN_KEY_VIOLATION: &'static str = "23503";
    /// SQLSTATE for insufficient privilege (row level security included).
    pub const INSUFFICIENT_PRIVILEGE: &'static str = "42501";

    /// Returns the store error code, if the store supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            DatabaseError::QueryFailed { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True when the row conflicts with existing data: a duplicate key or a
    /// reference to a missing row.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self.code(),
            Some(Self::UNIQUE_VIOLATION | Self::FOREIGN_KEY_VIOLATION)
        )
    }

    /// True when the store refused the request for lack of permission.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            DatabaseError::QueryFailed { status, code, .. } => {
                code.as_deref() == Some(Self::INSUFFICIENT_PRIVILEGE)
                    || *status == 401
                    || *status == 403
            }
            _ => false,
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(status: u16, code: Option<&str>) -> DatabaseError {
        DatabaseError::QueryFailed {
            status,
            code: code.map(str::to_string),
            message: "rejected".to_string(),
        }
    }

    #[test]
    fn test_constraint_codes_are_classified() {
        assert!(rejected(409, Some("23505")).is_constraint_violation());
        assert!(rejected(409, Some("23503")).is_constraint_violation());
        assert!(!rejected(400, Some("23502")).is_constraint_violation());
        assert!(!rejected(400, Some("PGRST102")).is_constraint_violation());
        assert!(!DatabaseError::ConnectionFailed("timeout".into()).is_constraint_violation());
    }

    #[test]
    fn test_permission_denied_from_code_or_status() {
        assert!(rejected(403, Some("42501")).is_permission_denied());
        assert!(rejected(401, None).is_permission_denied());
        assert!(!rejected(500, None).is_permission_denied());
    }

    #[test]
    fn test_query_failed_display_includes_code() {
        let err = Error::from(rejected(409, Some("23505")));
        assert_eq!(
            err.to_string(),
            "Database request failed: Query rejected by data store (23505): rejected"
        );

        let err = Error::from(rejected(500, None));
        assert!(err.to_string().contains("(unknown)"));
    }
}

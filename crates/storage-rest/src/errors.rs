//! Storage-specific error types for the hosted data store.
//!
//! This module wraps reqwest and protocol errors and converts them to the
//! storage-agnostic error types defined in `fundboard_core`.

use fundboard_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors that wrap HTTP client types.
///
/// These errors are internal to the storage layer and are converted to
/// `fundboard_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("HTTP client setup failed: {0}")]
    ClientSetup(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Data store returned {status}: {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerializationError(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ClientSetup(e) => Error::InvalidConfigValue(e),
            StorageError::RequestFailed(e) if e.is_decode() => {
                Error::Database(DatabaseError::Decode(e.to_string()))
            }
            StorageError::RequestFailed(e) => {
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            }
            StorageError::Rejected {
                status,
                code,
                message,
            } => Error::Database(DatabaseError::QueryFailed {
                status,
                code,
                message,
            }),
            StorageError::SerializationError(e) => Error::Database(DatabaseError::Decode(e)),
        }
    }
}

/// Extension trait for easily converting reqwest Results to core Results.
///
/// This provides a `.into_core()` method on any `Result<T, reqwest::Error>`
/// which handles the conversion through StorageError.
pub trait IntoCore<T> {
    fn into_core(self) -> fundboard_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, reqwest::Error> {
    fn into_core(self) -> fundboard_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

impl<T> IntoCore<T> for std::result::Result<T, serde_json::Error> {
    fn into_core(self) -> fundboard_core::Result<T> {
        self.map_err(|e| StorageError::from(e).into())
    }
}

//! Result and error types for the client library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Client library error type
///
/// Covers the three failure families the dispatcher has to tell apart:
/// transport failures (no response at all), server-reported errors
/// (non-2xx with a payload), and client-side validation failures.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a server-reported API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Client library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Completed-operation envelope returned by the dispatcher
///
/// Operations never propagate their errors to the caller; a rejected call
/// comes back as `success: false` with the normalized message filled in.
/// Callers that don't care about the outcome can drop it, callers that do
/// can inspect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationOutcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    /// True when the data came out of the response cache instead of the wire
    #[serde(default)]
    pub from_cache: bool,
}

impl<T> OperationOutcome<T> {
    /// Create a fulfilled outcome
    pub fn fulfilled(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            from_cache: false,
        }
    }

    /// Create a fulfilled outcome served from the cache
    pub fn cached(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            from_cache: true,
        }
    }

    /// Create a rejected outcome
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            from_cache: false,
        }
    }

    /// Map the payload type, keeping the outcome flags
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OperationOutcome<U> {
        OperationOutcome {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            from_cache: self.from_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_fulfilled() {
        let outcome: OperationOutcome<i32> = OperationOutcome::fulfilled(42);
        assert!(outcome.success);
        assert_eq!(outcome.data, Some(42));
        assert!(outcome.error.is_none());
        assert!(!outcome.from_cache);
    }

    #[test]
    fn test_outcome_rejected() {
        let outcome: OperationOutcome<i32> = OperationOutcome::rejected("Something went wrong");
        assert!(!outcome.success);
        assert!(outcome.data.is_none());
        assert_eq!(outcome.error, Some("Something went wrong".to_string()));
    }

    #[test]
    fn test_outcome_cached_map() {
        let outcome = OperationOutcome::cached(2).map(|n| n * 10);
        assert!(outcome.success);
        assert!(outcome.from_cache);
        assert_eq!(outcome.data, Some(20));
    }

    #[test]
    fn test_error_display() {
        let err = Error::api(403, "forbidden");
        assert_eq!(err.to_string(), "API error (403): forbidden");

        let err = Error::validation("bad input");
        assert!(err.to_string().contains("Validation error"));
    }
}

//! Error types for the searchlist crate.
//!
//! This module defines the crate-wide error type [`SearchListError`], the
//! [`UpstreamError`] payload reported by record sources, and a [`Result`]
//! alias. All errors are implemented using the `thiserror` crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by an external record or metadata source.
///
/// Mirrors the error body returned by the backend: an exception type, a
/// human-readable message and the server-side stack trace. The three parts are
/// joined with single spaces when displayed, which is also the summary text of
/// the error banner.
///
/// # Examples
///
/// ```
/// use searchlist::domain::UpstreamError;
///
/// let err = UpstreamError::new("QueryException", "unexpected token", "Class.Controller: line 12");
/// assert_eq!(err.to_string(), "QueryException unexpected token Class.Controller: line 12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{exception_type} {message} {stack_trace}")]
pub struct UpstreamError {
    /// Exception class name reported by the backend.
    pub exception_type: String,

    /// Error message reported by the backend.
    pub message: String,

    /// Backend stack trace, possibly empty.
    #[serde(default)]
    pub stack_trace: String,
}

impl UpstreamError {
    pub fn new(
        exception_type: impl Into<String>,
        message: impl Into<String>,
        stack_trace: impl Into<String>,
    ) -> Self {
        Self {
            exception_type: exception_type.into(),
            message: message.into(),
            stack_trace: stack_trace.into(),
        }
    }
}

/// The main error type for searchlist operations.
///
/// Source failures are absorbed into the table's message state rather than
/// returned from event handling. The `MetadataFetch` and `RecordFetch`
/// variants are what [`RecordTable::failure`](crate::app::RecordTable::failure)
/// reports for the failure behind the current error banner.
#[derive(Debug, Error)]
pub enum SearchListError {
    /// Field metadata could not be resolved.
    #[error("Metadata fetch error: {0}")]
    MetadataFetch(UpstreamError),

    /// Records could not be fetched.
    #[error("Record fetch error: {0}")]
    RecordFetch(UpstreamError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A record dataset could not be parsed.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for searchlist operations.
pub type Result<T> = std::result::Result<T, SearchListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_deserializes_backend_body() {
        let body = r#"{"exceptionType":"System.QueryException","message":"bad field","stackTrace":"line 4"}"#;
        let err: UpstreamError = serde_json::from_str(body).unwrap();
        assert_eq!(err.exception_type, "System.QueryException");
        assert_eq!(err.to_string(), "System.QueryException bad field line 4");
    }

    #[test]
    fn upstream_error_stack_trace_defaults_to_empty() {
        let err: UpstreamError =
            serde_json::from_str(r#"{"exceptionType":"E","message":"m"}"#).unwrap();
        assert!(err.stack_trace.is_empty());
    }

    #[test]
    fn wrapped_errors_name_their_origin() {
        let err = SearchListError::RecordFetch(UpstreamError::new("E", "m", "t"));
        assert_eq!(err.to_string(), "Record fetch error: E m t");
    }
}

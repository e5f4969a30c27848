//! Error types for the remote todo service client.

use thiserror::Error;

/// Result alias for provider operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the remote todo service
///
/// At the store boundary every failure collapses into a single latest-error
/// message (`error.to_string()`); the variants preserve the transport detail
/// for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be parsed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// Service returned a non-success status
    #[error("Service error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },
}

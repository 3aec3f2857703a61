//! Error types for HTTP operations.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level without dictating
/// recovery strategy. Whether to retry is left to the caller.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// Either the fixed call timeout or the caller's deadline elapsed
    /// before a response was received.
    #[error("Request timed out")]
    Timeout,

    /// The caller cancelled the request before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value could not be encoded.
    #[error("Invalid header value for {0}")]
    InvalidHeader(http::HeaderName),
}

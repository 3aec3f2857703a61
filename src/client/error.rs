//! Error type for send operations.

use thiserror::Error;

use crate::transport::HttpError;

/// Error returned by [`EmailSender`](super::EmailSender) operations.
///
/// The library never retries; the variant tells the caller what failed so it
/// can choose a policy. [`Transport`](Self::Transport) failures are usually
/// worth retrying, [`Api`](Self::Api) rejections usually are not.
#[derive(Debug, Error)]
pub enum SendError {
    /// The request body could not be encoded. No request was sent.
    #[error("Failed to serialize request: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request did not complete (network failure, timeout, cancellation,
    /// or an unusable base URL / token).
    #[error("Failed to send request: {0}")]
    Transport(#[from] HttpError),

    /// A `200 OK` response carried a body that is not a valid success payload.
    #[error("Failed to decode response (status {status}): {source}")]
    ResponseDecode {
        status: http::StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// A non-200 response carried a body that is not a valid error payload.
    #[error("Failed to decode error response (status {status}): {source}")]
    ErrorResponseDecode {
        status: http::StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The API rejected the request.
    #[error("API error: {message}")]
    Api {
        status: http::StatusCode,
        /// Server-supplied error text, verbatim.
        message: String,
    },
}

impl SendError {
    /// Returns the server's error message for [`SendError::Api`].
    #[must_use]
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the HTTP status when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::ResponseDecode { status, .. }
            | Self::ErrorResponseDecode { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::Serialization(_) | Self::Transport(_) => None,
        }
    }
}

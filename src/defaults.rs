//! Fixed client policy.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.
//! None of these are exposed as tunables.

use std::time::Duration;

/// Path of the send endpoint, appended to the client's base URL.
pub const SEND_EMAIL_PATH: &str = "/v1/email/send";

/// Total-call timeout in seconds applied to every request.
pub const CALL_TIMEOUT_SECS: u64 = 30;

/// Authorization scheme used for the API token.
pub const BEARER_SCHEME: &str = "Bearer";

/// Content type of request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Total-call timeout as Duration.
#[must_use]
pub const fn call_timeout() -> Duration {
    Duration::from_secs(CALL_TIMEOUT_SECS)
}

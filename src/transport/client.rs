//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use crate::defaults;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements the
/// [`HttpClient`] trait. TLS certificate verification stays at reqwest's
/// default (enabled), and every request carries the fixed total-call
/// timeout from [`defaults::call_timeout`].
///
/// The wrapped client pools connections internally; cloning is cheap and
/// clones share the pool.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    timeout: Duration,
}

impl ReqwestClient {
    /// Creates a new HTTP client with the fixed call timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            timeout: defaults::call_timeout(),
        }
    }

    /// Returns the total-call timeout applied to each request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a reqwest failure onto the transport error taxonomy.
fn map_reqwest_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let response = self
            .inner
            .post(req.url.as_str())
            .headers(req.headers)
            .body(req.body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        // Consumes the response, so the body stream is released on every path.
        let body = response
            .bytes()
            .await
            .map_err(map_reqwest_error)?
            .to_vec();

        tracing::trace!(%status, body_len = body.len(), "Response received");

        Ok(HttpResponse::new(status, body))
    }
}

//! The JSON POST exchanged with the API, and the transport trait that
//! carries it.

use crate::defaults;

use super::HttpError;

/// An authenticated JSON POST, ready to hand to an [`HttpClient`].
///
/// Always carries `Content-Type: application/json`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL
    pub url: url::Url,
    /// Headers to send, including `Content-Type` and, once set,
    /// `Authorization`
    pub headers: http::HeaderMap,
    /// Encoded JSON body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a JSON POST to `url` carrying `body`.
    #[must_use]
    pub fn json(url: url::Url, body: Vec<u8>) -> Self {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(defaults::JSON_CONTENT_TYPE),
        );
        Self { url, headers, body }
    }

    /// Sets `Authorization: Bearer <token>`, marked sensitive so it is kept
    /// out of debug output and HPACK tables.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if the token contains bytes that
    /// cannot appear in a header value (control characters, newlines).
    pub fn with_bearer_token(mut self, token: &str) -> Result<Self, HttpError> {
        let mut value =
            http::HeaderValue::from_str(&format!("{} {token}", defaults::BEARER_SCHEME))
                .map_err(|_| HttpError::InvalidHeader(http::header::AUTHORIZATION))?;
        value.set_sensitive(true);
        self.headers.insert(http::header::AUTHORIZATION, value);
        Ok(self)
    }
}

/// Status and fully buffered body of an API response.
///
/// Buffering means the connection's body stream is already released by the
/// time a response value exists.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: http::StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: http::StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true if the status is exactly `200 OK`.
    ///
    /// Other 2xx codes are not treated as success by the send API.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == http::StatusCode::OK
    }
}

/// Carries an [`HttpRequest`] to the API and returns its response.
///
/// [`ReqwestClient`](super::ReqwestClient) is the production implementation;
/// tests substitute recording or hanging transports. One transport serves
/// every concurrent call made through a client, hence `Send + Sync`.
pub trait HttpClient: Send + Sync {
    /// Sends the request once and buffers the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the request does not complete:
    /// [`HttpError::Connection`] for network failures,
    /// [`HttpError::Timeout`] when the call timeout elapses,
    /// [`HttpError::InvalidUrl`] when the URL is rejected.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}

impl<T: HttpClient> HttpClient for std::sync::Arc<T> {
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send {
        (**self).request(req)
    }
}

//! Email sender trait and the HTTP API client.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::defaults;
use crate::email::{ApiErrorResponse, ApiResponse, Email};
use crate::transport::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestClient, SendContext,
};

use super::SendError;

/// Trait for dispatching emails.
///
/// Lets embedding applications swap in a fake dispatcher in their own tests.
pub trait EmailSender: Send + Sync {
    /// Sends all `emails` in a single request.
    ///
    /// The call is bounded by `ctx`; see [`SendContext`]. Exactly one attempt
    /// is made.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if the request cannot be encoded or sent, if the
    /// response cannot be decoded, or if the API rejects the request.
    fn send_emails(
        &self,
        ctx: &SendContext,
        emails: &[Email],
    ) -> impl std::future::Future<Output = Result<ApiResponse, SendError>> + Send;

    /// Sends a single email.
    ///
    /// Equivalent to `send_emails(ctx, &[email])`, including the wire body.
    ///
    /// # Errors
    ///
    /// Same as [`EmailSender::send_emails`].
    fn send_email(
        &self,
        ctx: &SendContext,
        email: &Email,
    ) -> impl std::future::Future<Output = Result<ApiResponse, SendError>> + Send {
        self.send_emails(ctx, std::slice::from_ref(email))
    }
}

/// Client for the send endpoint of the email API.
///
/// Holds the base URL, the bearer token, and a reusable transport. It keeps
/// no per-call state, so one instance can serve concurrent calls from many
/// tasks (wrap it in an `Arc` to share it).
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use laneful::{Address, Email, EmailSender, LanefulClient, SendContext};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), laneful::SendError> {
/// let client = LanefulClient::new("https://api.example.com", "secret-token");
/// let email = Email::new(Address::new("noreply@example.com"))
///     .with_to("user@example.com")
///     .with_subject("Hello")
///     .with_text_content("Hi there");
///
/// let ctx = SendContext::background().with_timeout(Duration::from_secs(10));
/// let response = client.send_email(&ctx, &email).await?;
/// println!("status: {}", response.status);
/// # Ok(())
/// # }
/// ```
pub struct LanefulClient<H = ReqwestClient> {
    transport: H,
    base_url: String,
    auth_token: String,
}

impl LanefulClient<ReqwestClient> {
    /// Creates a client using the production transport.
    ///
    /// The transport verifies TLS certificates and applies a fixed 30-second
    /// total-call timeout. The base URL is not validated here; an unusable
    /// one fails each call with [`HttpError::InvalidUrl`].
    ///
    /// Requests go to `{base_url}/v1/email/send` with any trailing `/` on
    /// `base_url` removed first, so `https://api.example.com/` and
    /// `https://api.example.com` reach the same endpoint.
    #[must_use]
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self::with_transport(ReqwestClient::new(), base_url, auth_token)
    }
}

impl<H> LanefulClient<H> {
    /// Creates a client over a custom transport.
    #[must_use]
    pub fn with_transport(
        transport: H,
        base_url: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            auth_token: auth_token.into(),
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }

    /// Resolves the send endpoint against the base URL.
    pub(super) fn endpoint(&self) -> Result<url::Url, HttpError> {
        let raw = format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            defaults::SEND_EMAIL_PATH
        );
        url::Url::parse(&raw).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Builds the POST request for `emails`.
    ///
    /// Encoding happens first, so an unencodable batch never reaches the
    /// network layer.
    fn build_request(&self, emails: &[Email]) -> Result<HttpRequest, SendError> {
        let body = encode_request(emails)?;
        let url = self.endpoint()?;

        Ok(HttpRequest::json(url, body).with_bearer_token(&self.auth_token)?)
    }
}

impl<H> fmt::Debug for LanefulClient<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanefulClient")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl<H: Clone> Clone for LanefulClient<H> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            base_url: self.base_url.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}

/// Borrowed view of [`EmailRequest`](crate::email::EmailRequest).
///
/// Serializes to the same bytes as the owned envelope, without cloning the
/// caller's emails.
#[derive(Serialize)]
struct RequestBody<'a> {
    emails: &'a [Email],
}

/// Encodes `emails` into the JSON wire body.
fn encode_request(emails: &[Email]) -> Result<Vec<u8>, SendError> {
    serde_json::to_vec(&RequestBody { emails }).map_err(SendError::Serialization)
}

/// Decodes the first JSON value in `body`; anything after it is ignored.
fn decode_first<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .next()
    {
        Some(result) => result,
        // No value at all: let the strict decoder report the EOF.
        None => serde_json::from_slice(body),
    }
}

/// Interprets a buffered response.
///
/// Only `200 OK` counts as success; every other status is decoded as an
/// error payload. Missing `status`/`error` keys decode as empty strings.
fn decode_response(response: &HttpResponse) -> Result<ApiResponse, SendError> {
    let status = response.status;

    if response.is_ok() {
        return decode_first::<ApiResponse>(&response.body)
            .map_err(|source| SendError::ResponseDecode { status, source });
    }

    let error = decode_first::<ApiErrorResponse>(&response.body)
        .map_err(|source| SendError::ErrorResponseDecode { status, source })?;

    Err(SendError::Api {
        status,
        message: error.error,
    })
}

impl<H: HttpClient> EmailSender for LanefulClient<H> {
    async fn send_emails(
        &self,
        ctx: &SendContext,
        emails: &[Email],
    ) -> Result<ApiResponse, SendError> {
        let request = self.build_request(emails)?;

        tracing::debug!(email_count = emails.len(), url = %request.url, "Sending emails");

        let response = ctx.run(self.transport.request(request)).await?;

        tracing::debug!(status = %response.status, "Send API responded");

        decode_response(&response)
    }
}

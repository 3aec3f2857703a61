//! Webhook signature verification.
//!
//! Webhook deliveries are signed with HMAC-SHA256 over the raw request body,
//! keyed by the shared webhook secret, and sent as a lowercase hex digest.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the lowercase hex HMAC-SHA256 of `payload` keyed by `secret`.
///
/// Returns `None` if the MAC rejects the key.
///
/// # Example
///
/// ```
/// use laneful::webhook::compute_signature;
///
/// let sig = compute_signature(b"secret", b"{}").unwrap();
/// assert_eq!(sig.len(), 64);
/// ```
#[must_use]
pub fn compute_signature(secret: &[u8], payload: &[u8]) -> Option<String> {
    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(m) => m,
        Err(_) => {
            tracing::debug!("webhook_signature_invalid_key");
            return None;
        }
    };
    mac.update(payload);
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Verifies a webhook signature.
///
/// Returns `true` only if `signature` is exactly the lowercase hex
/// HMAC-SHA256 of `payload` keyed by `secret`. Uppercase hex, a different
/// length, or any differing byte yields `false`. The byte comparison runs in
/// constant time with respect to the expected digest.
///
/// No timestamp or replay-window check is made; callers that need freshness
/// must enforce it themselves.
///
/// # Arguments
///
/// * `secret` - The shared webhook secret
/// * `payload` - The raw request body, exactly as received
/// * `signature` - The signature supplied with the delivery
#[must_use]
pub fn verify_signature(secret: &str, payload: &str, signature: &str) -> bool {
    verify_bytes(secret.as_bytes(), payload.as_bytes(), signature)
}

fn verify_bytes(secret: &[u8], payload: &[u8], signature: &str) -> bool {
    match compute_signature(secret, payload) {
        Some(expected) => constant_time_eq(signature.as_bytes(), expected.as_bytes()),
        None => false,
    }
}

/// Constant-time byte comparison.
///
/// Unequal lengths return early; the length of a hex digest is not secret.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Holds a webhook secret and checks deliveries against it.
///
/// # Example
///
/// ```
/// use laneful::webhook::{WebhookVerifier, compute_signature};
///
/// let verifier = WebhookVerifier::new("whsec");
/// let body = r#"{"event":"delivered"}"#;
/// let sig = compute_signature(b"whsec", body.as_bytes()).unwrap();
///
/// assert!(verifier.verify(body, &sig));
/// assert!(!verifier.verify(body, "deadbeef"));
/// ```
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: String,
}

impl WebhookVerifier {
    /// Creates a verifier for the given shared secret.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verifies a UTF-8 payload. Same rules as [`verify_signature`].
    #[must_use]
    pub fn verify(&self, payload: &str, signature: &str) -> bool {
        verify_signature(&self.secret, payload, signature)
    }

    /// Verifies a raw body that may not be valid UTF-8.
    #[must_use]
    pub fn verify_bytes(&self, payload: &[u8], signature: &str) -> bool {
        verify_bytes(self.secret.as_bytes(), payload, signature)
    }

    /// Computes the signature the API would send for `payload`.
    ///
    /// Returns `None` under the same condition as [`compute_signature`].
    #[must_use]
    pub fn sign(&self, payload: &[u8]) -> Option<String> {
        compute_signature(self.secret.as_bytes(), payload)
    }
}

impl fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

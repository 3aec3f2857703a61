//! Verification of inbound webhook deliveries.
//!
//! The library does not receive webhooks itself. The embedding application
//! accepts the HTTP POST, extracts the raw body and the signature header, and
//! passes both with the shared secret to [`verify_signature`] (or a
//! [`WebhookVerifier`] holding the secret).

mod signature;


pub use signature::{WebhookVerifier, compute_signature, verify_signature};

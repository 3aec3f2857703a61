//! Laneful: client for a transactional email API.
//!
//! Sends batches of emails through one authenticated HTTP call
//! ([`LanefulClient`]) and verifies the HMAC signatures of inbound webhook
//! deliveries ([`webhook::verify_signature`]).
//!
//! The two halves are independent. Neither retries, caches, or logs errors;
//! every failure is returned to the caller.

pub mod client;
pub mod defaults;
pub mod email;
pub mod transport;
pub mod webhook;

pub use client::{EmailSender, LanefulClient, SendError};
pub use email::{
    Address, ApiErrorResponse, ApiResponse, Attachment, Email, EmailRequest, TemplateValue,
    TrackingSettings,
};
pub use transport::{HttpError, SendContext};
pub use webhook::{WebhookVerifier, verify_signature};

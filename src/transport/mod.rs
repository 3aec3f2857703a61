//! Transport layer for sending HTTP requests to the email API.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Bounding a call by deadline or cancellation ([`SendContext`])

mod client;
mod context;
mod error;
mod http;


pub use client::ReqwestClient;
pub use context::SendContext;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};

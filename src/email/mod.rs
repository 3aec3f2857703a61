//! Email payload types.
//!
//! Value types describing what is sent ([`Email`], [`EmailRequest`]) and
//! what comes back ([`ApiResponse`], [`ApiErrorResponse`]). They serialize
//! to the API's snake-case JSON and leave unset fields out of the body.

mod types;

#[cfg(test)]
mod types_tests;

pub use types::{
    Address, ApiErrorResponse, ApiResponse, Attachment, Email, EmailRequest, TemplateValue,
    TrackingSettings,
};

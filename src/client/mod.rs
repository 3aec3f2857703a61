//! Email dispatch client.
//!
//! [`LanefulClient`] turns a batch of [`Email`](crate::email::Email)s into one
//! authenticated `POST` to the send endpoint and maps the outcome onto
//! [`SendError`]. The [`EmailSender`] trait is the seam for substituting it.

mod error;
mod sender;


pub use error::SendError;
pub use sender::{EmailSender, LanefulClient};

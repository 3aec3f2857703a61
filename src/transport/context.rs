//! Caller-supplied deadline and cancellation for a single call.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use super::HttpError;

/// Deadline and cancellation signal bounding one call.
///
/// A context is consulted while a request is in flight. When its deadline
/// passes or its cancellation channel flips to `true`, the in-flight request
/// future is dropped and the call fails with [`HttpError::Timeout`] or
/// [`HttpError::Cancelled`]. Nothing is retried.
///
/// The fixed transport timeout applies independently; whichever limit is
/// reached first ends the call.
///
/// # Example
///
/// ```
/// use laneful::transport::SendContext;
/// use std::time::Duration;
///
/// let (cancel_tx, cancel_rx) = tokio::sync::watch::channel(false);
/// let ctx = SendContext::background()
///     .with_timeout(Duration::from_secs(5))
///     .with_cancellation(cancel_rx);
///
/// // Later, from any task:
/// let _ = cancel_tx.send(true);
/// # let _ = ctx;
/// ```
#[derive(Debug, Clone, Default)]
pub struct SendContext {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

impl SendContext {
    /// A context with no deadline that is never cancelled.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Sets the deadline to `timeout` from now.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Sets an absolute deadline.
    ///
    /// If a deadline is already set, the earlier of the two wins.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |d| d.min(deadline)));
        self
    }

    /// Attaches a cancellation channel.
    ///
    /// The call is cancelled once the channel holds `true`. If the sender is
    /// dropped without ever sending `true`, the context is never cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: watch::Receiver<bool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Returns the configured deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true if cancellation has already been signalled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Returns true if the deadline has already passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| d <= Instant::now())
    }

    /// Drives `fut` to completion unless the context ends first.
    ///
    /// Cancellation is checked before the deadline, so a context that is
    /// both cancelled and expired reports [`HttpError::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] or [`HttpError::Timeout`] if the
    /// context ends before `fut` completes; otherwise whatever `fut` returns.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, HttpError>
    where
        F: Future<Output = Result<T, HttpError>>,
    {
        tokio::select! {
            biased;

            () = self.cancelled() => Err(HttpError::Cancelled),
            () = self.expired() => Err(HttpError::Timeout),
            result = fut => result,
        }
    }

    /// Completes once cancellation is signalled; pends forever otherwise.
    async fn cancelled(&self) {
        let Some(mut rx) = self.cancel.clone() else {
            return std::future::pending().await;
        };
        if rx.wait_for(|cancelled| *cancelled).await.map(|_| ()).is_err() {
            // Sender dropped without cancelling.
            std::future::pending::<()>().await;
        }
    }

    /// Completes once the deadline passes; pends forever without one.
    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

//! Cancellation signal
//!
//! A [`CancellationToken`] is held by whoever may abort a run (the CLI wires
//! it to Ctrl-C); each render receives a [`CancellationReceiver`] and races
//! provider calls against it.

use std::sync::Arc;

use tokio::sync::watch;

/// Sending half of the cancellation signal.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Signals cancellation to every receiver. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Returns true once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Creates a receiver observing this token.
    #[must_use]
    pub fn receiver(&self) -> CancellationReceiver {
        CancellationReceiver {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of the cancellation signal.
#[derive(Debug, Clone)]
pub struct CancellationReceiver {
    receiver: watch::Receiver<bool>,
}

impl CancellationReceiver {
    /// A receiver that is never cancelled.
    #[must_use]
    pub fn never() -> Self {
        let (_sender, receiver) = watch::channel(false);
        Self { receiver }
    }

    /// Returns true if cancellation has been signalled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Completes once cancellation is signalled.
    ///
    /// Never completes if the token was dropped without cancelling.
    pub async fn cancelled(&mut self) {
        if self.receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_receiver() {
        let token = CancellationToken::new();
        let mut receiver = token.receiver();
        assert!(!receiver.is_cancelled());

        let waiter = tokio::spawn(async move { receiver.cancelled().await });
        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("receiver should observe cancellation")
            .expect("task should not panic");
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_already_cancelled_completes_immediately() {
        let token = CancellationToken::new();
        token.cancel();
        let mut receiver = token.receiver();
        assert!(receiver.is_cancelled());
        tokio::time::timeout(Duration::from_millis(100), receiver.cancelled())
            .await
            .expect("should complete immediately");
    }

    #[tokio::test]
    async fn test_never_stays_pending() {
        let mut receiver = CancellationReceiver::never();
        let result = tokio::time::timeout(Duration::from_millis(20), receiver.cancelled()).await;
        assert!(result.is_err());
    }
}

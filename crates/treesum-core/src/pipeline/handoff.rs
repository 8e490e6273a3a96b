//! Cancellable handoff channels
//!
//! A handoff is a bounded FIFO between pipeline stages. Every blocking
//! operation on it races against the run's cancellation token, so a stage
//! that is stuck waiting for a peer unwinds as soon as the run is canceled.
//!
//! The channel is exhausted for the receiving side once every sender clone
//! has been dropped. The worker pool relies on this as its closing barrier:
//! each worker owns one sender clone, so the result sink only reports
//! [`RecvOutcome::Exhausted`] after the last worker has exited.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio_util::sync::CancellationToken;

/// Outcome of a [`HandoffSender::send`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The item was accepted downstream
    Accepted,
    /// Cancellation was observed first, or every receiver is gone.
    /// The item has been dropped.
    Canceled,
}

/// Outcome of a [`HandoffReceiver::recv`]
#[derive(Debug, PartialEq, Eq)]
pub enum RecvOutcome<T> {
    Item(T),
    /// Every sender is gone and the buffer is drained
    Exhausted,
    /// Cancellation was observed before an item arrived
    Canceled,
}

/// Create a handoff with room for `capacity` in-flight items (at least one)
#[must_use]
pub fn channel<T>(capacity: usize) -> (HandoffSender<T>, HandoffReceiver<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        HandoffSender { tx },
        HandoffReceiver {
            rx: Arc::new(Mutex::new(rx)),
        },
    )
}

/// Sending half of a handoff; clone it to add writers
#[derive(Debug)]
pub struct HandoffSender<T> {
    tx: mpsc::Sender<T>,
}

impl<T> Clone for HandoffSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> HandoffSender<T> {
    /// Wait until `item` is accepted or `cancel` fires, whichever is first.
    ///
    /// An already-canceled token always wins, so nothing new enters the
    /// pipeline after cancellation.
    pub async fn send(&self, item: T, cancel: &CancellationToken) -> SendOutcome {
        tokio::select! {
            biased;
            () = cancel.cancelled() => SendOutcome::Canceled,
            sent = self.tx.send(item) => match sent {
                Ok(()) => SendOutcome::Accepted,
                Err(_) => SendOutcome::Canceled,
            },
        }
    }

    /// [`send`](Self::send) for code running on a blocking thread
    ///
    /// # Panics
    /// Panics if called from within an async execution context.
    pub fn blocking_send(
        &self,
        runtime: &tokio::runtime::Handle,
        item: T,
        cancel: &CancellationToken,
    ) -> SendOutcome {
        runtime.block_on(self.send(item, cancel))
    }
}

/// Receiving half of a handoff; clones share the same queue
#[derive(Debug)]
pub struct HandoffReceiver<T> {
    rx: Arc<Mutex<mpsc::Receiver<T>>>,
}

impl<T> Clone for HandoffReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            rx: Arc::clone(&self.rx),
        }
    }
}

impl<T> HandoffReceiver<T> {
    /// Take the next item, racing against `cancel`.
    ///
    /// Each item is delivered to exactly one receiver clone.
    pub async fn recv(&self, cancel: &CancellationToken) -> RecvOutcome<T> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => RecvOutcome::Canceled,
            item = async { self.rx.lock().await.recv().await } => match item {
                Some(item) => RecvOutcome::Item(item),
                None => RecvOutcome::Exhausted,
            },
        }
    }
}

// crates/infra/src/pending/future.rs
use std::future::Future;

use futures::{channel::oneshot, executor::block_on};
use ordered_collect_ports::PendingComputation;
use ordered_collect_shared_kernel::{BoxError, CollectError, Result};

/// Drives any future resolving to `Result<T, E>` to completion on the
/// calling thread.
///
/// Wrap a clone of a [`futures::future::Shared`] to keep a handle to the
/// same computation elsewhere.
#[derive(Debug, Clone)]
#[must_use = "a Blocking future does nothing until waited on"]
pub struct Blocking<F>(pub F);

impl<F, T, E> PendingComputation for Blocking<F>
where
    F: Future<Output = std::result::Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = T;

    fn wait(self) -> Result<T> {
        block_on(self.0).map_err(CollectError::computation_failed)
    }
}

/// Receiving half of a [`futures::channel::oneshot`] channel.
///
/// A sender dropped without sending, or cancelled, interrupts the wait.
#[derive(Debug)]
pub struct OneshotHandle<T, E> {
    receiver: oneshot::Receiver<std::result::Result<T, E>>,
}

impl<T, E> OneshotHandle<T, E> {
    pub fn pair() -> (oneshot::Sender<std::result::Result<T, E>>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self { receiver })
    }
}

impl<T, E> From<oneshot::Receiver<std::result::Result<T, E>>> for OneshotHandle<T, E> {
    fn from(receiver: oneshot::Receiver<std::result::Result<T, E>>) -> Self {
        Self { receiver }
    }
}

impl<T, E> PendingComputation for OneshotHandle<T, E>
where
    E: Into<BoxError>,
{
    type Output = T;

    fn wait(self) -> Result<T> {
        match block_on(self.receiver) {
            Ok(outcome) => outcome.map_err(CollectError::computation_failed),
            Err(oneshot::Canceled) => Err(CollectError::wait_interrupted("oneshot sender was dropped")),
        }
    }
}

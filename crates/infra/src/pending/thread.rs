// crates/infra/src/pending/thread.rs
use std::{any::Any, thread::JoinHandle};

use ordered_collect_ports::PendingComputation;
use ordered_collect_shared_kernel::{BoxError, CollectError, Result};

/// A spawned thread whose closure returns `Result<T, E>`.
///
/// A panicking thread counts as a failed computation.
#[derive(Debug)]
pub struct ThreadHandle<T, E> {
    handle: JoinHandle<std::result::Result<T, E>>,
}

impl<T, E> ThreadHandle<T, E> {
    pub fn new(handle: JoinHandle<std::result::Result<T, E>>) -> Self {
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T, E> From<JoinHandle<std::result::Result<T, E>>> for ThreadHandle<T, E> {
    fn from(handle: JoinHandle<std::result::Result<T, E>>) -> Self {
        Self::new(handle)
    }
}

impl<T, E> PendingComputation for ThreadHandle<T, E>
where
    E: Into<BoxError>,
{
    type Output = T;

    fn wait(self) -> Result<T> {
        match self.handle.join() {
            Ok(outcome) => outcome.map_err(CollectError::computation_failed),
            Err(payload) => Err(CollectError::ComputationFailed {
                reason: format!("worker thread panicked: {}", panic_message(payload.as_ref())),
                source: None,
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

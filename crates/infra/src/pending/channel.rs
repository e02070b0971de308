// crates/infra/src/pending/channel.rs
use crossbeam_channel::{Receiver, Sender};
use ordered_collect_ports::PendingComputation;
use ordered_collect_shared_kernel::{BoxError, CollectError, Result};

/// Receiving end of a completion channel carrying exactly one outcome.
///
/// If every sender is dropped before an outcome arrives the wait is
/// reported as interrupted.
#[derive(Debug)]
pub struct ChannelHandle<T, E> {
    receiver: Receiver<std::result::Result<T, E>>,
}

impl<T, E> ChannelHandle<T, E> {
    /// Creates a completion channel with room for a single outcome, so the
    /// producer never blocks on `send`.
    pub fn pair() -> (Sender<std::result::Result<T, E>>, Self) {
        let (sender, receiver) = crossbeam_channel::bounded(1);
        (sender, Self { receiver })
    }
}

impl<T, E> From<Receiver<std::result::Result<T, E>>> for ChannelHandle<T, E> {
    fn from(receiver: Receiver<std::result::Result<T, E>>) -> Self {
        Self { receiver }
    }
}

impl<T, E> PendingComputation for ChannelHandle<T, E>
where
    E: Into<BoxError>,
{
    type Output = T;

    fn wait(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(outcome) => outcome.map_err(CollectError::computation_failed),
            Err(_) => Err(CollectError::wait_interrupted(
                "completion channel disconnected before an outcome was sent",
            )),
        }
    }
}

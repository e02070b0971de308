// crates/ports/src/pending.rs
use ordered_collect_shared_kernel::Result;

/// Handle to an asynchronous unit of work that has already been submitted
/// elsewhere and will eventually produce a value or an error.
///
/// Consumers only wait on the handle; they never schedule, retry or cancel
/// the underlying work.
pub trait PendingComputation {
    type Output;

    /// Blocks the calling thread until the computation completes.
    ///
    /// The wait is unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::ComputationFailed`] when the computation
    /// resolved with an error, or [`CollectError::WaitInterrupted`] when the
    /// handle can no longer produce an outcome.
    ///
    /// [`CollectError::ComputationFailed`]: ordered_collect_shared_kernel::CollectError::ComputationFailed
    /// [`CollectError::WaitInterrupted`]: ordered_collect_shared_kernel::CollectError::WaitInterrupted
    fn wait(self) -> Result<Self::Output>;
}

/// Already-resolved outcomes are trivially pending.
impl<T> PendingComputation for Result<T> {
    type Output = T;

    fn wait(self) -> Result<T> {
        self
    }
}

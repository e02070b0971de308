// crates/domain/src/collectors/all_completed.rs
use log::{debug, warn};
use ordered_collect_ports::PendingComputation;
use ordered_collect_shared_kernel::Result;

use crate::{collector::Collector, model::ResolvedResults};

/// Waits for each pending computation in turn and gathers the resolved
/// values in input order.
///
/// Each `accumulate` blocks without a timeout until its computation
/// completes. The first failure ends the reduction; computations further
/// along the sequence are neither awaited nor cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCompleted;

/// Returns a collector that waits for every pending computation.
pub fn collect_all_completed() -> AllCompleted {
    AllCompleted
}

impl<P> Collector<P> for AllCompleted
where
    P: PendingComputation,
{
    type Accumulator = Vec<P::Output>;
    type Output = ResolvedResults<P::Output>;

    fn init(&self) -> Self::Accumulator {
        Vec::new()
    }

    fn accumulate(&self, acc: &mut Self::Accumulator, pending: P) -> Result<()> {
        debug!("awaiting pending computation {} of this partition", acc.len());
        match pending.wait() {
            Ok(value) => {
                acc.push(value);
                Ok(())
            }
            Err(err) => {
                warn!("pending computation failed after {} resolved: {err}", acc.len());
                Err(err)
            }
        }
    }

    fn merge(&self, mut left: Self::Accumulator, mut right: Self::Accumulator) -> Result<Self::Accumulator> {
        left.append(&mut right);
        Ok(left)
    }

    fn finish(&self, acc: Self::Accumulator) -> Self::Output {
        ResolvedResults::from_values(acc)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ordered_collect_shared_kernel::CollectError;

    use super::*;
    use crate::collector::{CollectorExt, collect_partitioned};

    /// Records whether it was awaited.
    struct Probe<'a> {
        outcome: Result<i32>,
        awaited: &'a Cell<bool>,
    }

    impl PendingComputation for Probe<'_> {
        type Output = i32;

        fn wait(self) -> Result<i32> {
            self.awaited.set(true);
            self.outcome
        }
    }

    #[test]
    fn resolves_in_submission_order() {
        let outcomes: Vec<Result<i32>> = vec![Ok(10), Ok(20), Ok(30)];
        let resolved = collect_all_completed().collect_from(outcomes).unwrap();
        assert_eq!(resolved, [10, 20, 30]);
    }

    #[test]
    fn empty_input_resolves_to_empty_results() {
        let resolved = collect_all_completed().collect_from(Vec::<Result<u8>>::new()).unwrap();
        assert!(resolved.is_empty());
    }

    #[test]
    fn first_failure_stops_waiting() {
        let flags = [Cell::new(false), Cell::new(false), Cell::new(false)];
        let outcomes = vec![Ok(10), Err(CollectError::computation_failed("boom")), Ok(30)];
        let probes: Vec<_> = outcomes
            .into_iter()
            .zip(&flags)
            .map(|(outcome, awaited)| Probe { outcome, awaited })
            .collect();

        let err = collect_all_completed().collect_from(probes).unwrap_err();

        assert!(err.is_computation_failure());
        assert_eq!(err.to_string(), "Computation failed: boom");
        assert!(flags[0].get());
        assert!(flags[1].get());
        assert!(!flags[2].get(), "computations after the failure must not be awaited");
    }

    #[test]
    fn interrupted_wait_propagates_as_is() {
        let outcomes = vec![Ok(1), Err(CollectError::wait_interrupted("sender dropped")), Ok(3)];
        let err = collect_all_completed().collect_from(outcomes).unwrap_err();
        assert!(err.is_wait_interrupted());
    }

    #[test]
    fn merge_appends_right_after_left() {
        let merged = <AllCompleted as Collector<Result<i32>>>::merge(&AllCompleted, vec![1, 2], vec![3]).unwrap();
        assert_eq!(merged, vec![1, 2, 3]);
    }

    #[test]
    fn partitioned_run_preserves_order() {
        let outcomes = || (0..25).map(Ok).collect::<Vec<Result<i32>>>();
        for chunk_len in [1, 2, 7, 25, 40] {
            let resolved = collect_partitioned(outcomes(), &AllCompleted, chunk_len).unwrap();
            assert_eq!(resolved.into_vec(), (0..25).collect::<Vec<_>>());
        }
    }
}

// crates/domain/src/collector.rs
//! The reduction abstraction shared by every collector strategy, plus the
//! drivers that run a collector over a sequence without a thread pool.

use log::trace;
use ordered_collect_shared_kernel::{CollectError, Result};

/// A four-part folding strategy: `init`, `accumulate`, `merge`, `finish`.
///
/// A collector is shared read-only by every branch of a reduction, while each
/// accumulator is owned by exactly one branch at a time. When a driver splits
/// the input into sub-sequences, it must call [`Collector::merge`] with the
/// accumulator of the earlier sub-sequence as `left`.
///
/// Any `Err` returned from `accumulate` or `merge` is terminal: the driver
/// stops and surfaces that error, and `finish` is never called.
pub trait Collector<T> {
    /// Mutable working state.
    type Accumulator;
    /// Immutable result produced by `finish`.
    type Output;

    fn init(&self) -> Self::Accumulator;

    /// Folds one element into `acc`.
    ///
    /// # Errors
    ///
    /// Returns an error when the element cannot be folded; the whole
    /// reduction fails with it.
    fn accumulate(&self, acc: &mut Self::Accumulator, item: T) -> Result<()>;

    /// Combines two partial accumulators, `left` covering elements that
    /// precede those covered by `right`.
    ///
    /// # Errors
    ///
    /// Returns an error when the partial results cannot be combined.
    fn merge(&self, left: Self::Accumulator, right: Self::Accumulator) -> Result<Self::Accumulator>;

    fn finish(&self, acc: Self::Accumulator) -> Self::Output;
}

/// Runs `collector` over `items` on the calling thread.
///
/// Consumption stops at the first failing element, so later elements are
/// never pulled from the iterator.
///
/// # Errors
///
/// Returns the first error raised by [`Collector::accumulate`].
pub fn collect_sequential<I, C>(items: I, collector: &C) -> Result<C::Output>
where
    I: IntoIterator,
    C: Collector<I::Item> + ?Sized,
{
    let mut acc = collector.init();
    for item in items {
        collector.accumulate(&mut acc, item)?;
    }
    Ok(collector.finish(acc))
}

/// Runs `collector` over `items` split into consecutive chunks of
/// `chunk_len` elements, each folded into its own accumulator. The partial
/// accumulators are then merged pairwise, neighbour with neighbour, until one
/// remains.
///
/// This is the same decomposition a work-stealing pool performs, made
/// deterministic. On success the output equals [`collect_sequential`]'s.
///
/// # Errors
///
/// Returns [`CollectError::InvalidConfiguration`] when `chunk_len` is zero,
/// otherwise the first error raised by `accumulate` or `merge`.
pub fn collect_partitioned<I, C>(items: I, collector: &C, chunk_len: usize) -> Result<C::Output>
where
    I: IntoIterator,
    C: Collector<I::Item> + ?Sized,
{
    if chunk_len == 0 {
        return Err(CollectError::InvalidConfiguration {
            reason: "chunk length must be at least 1".to_string(),
        });
    }

    let mut partials = Vec::new();
    let mut current = collector.init();
    let mut filled = 0usize;
    for item in items {
        collector.accumulate(&mut current, item)?;
        filled += 1;
        if filled == chunk_len {
            partials.push(std::mem::replace(&mut current, collector.init()));
            filled = 0;
        }
    }
    if filled > 0 || partials.is_empty() {
        partials.push(current);
    }

    trace!("merging {} partial accumulators", partials.len());
    while partials.len() > 1 {
        let mut next = Vec::with_capacity(partials.len().div_ceil(2));
        let mut pending = partials.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => next.push(collector.merge(left, right)?),
                None => next.push(left),
            }
        }
        partials = next;
    }

    let acc = match partials.pop() {
        Some(acc) => acc,
        None => collector.init(),
    };
    Ok(collector.finish(acc))
}

/// Convenience entry points available on every collector.
pub trait CollectorExt<T>: Collector<T> {
    /// Sequentially folds `items` with this collector.
    ///
    /// # Errors
    ///
    /// See [`collect_sequential`].
    fn collect_from<I>(&self, items: I) -> Result<Self::Output>
    where
        I: IntoIterator<Item = T>,
    {
        collect_sequential(items, self)
    }
}

impl<T, C: Collector<T> + ?Sized> CollectorExt<T> for C {}

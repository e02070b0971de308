// crates/infra/src/parallel.rs
//! rayon-backed driver for [`Collector`]s.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use ordered_collect_domain::{Collector, ExecutionConfig, collect_sequential};
use ordered_collect_shared_kernel::{CollectError, ErrorContext, Result};
use rayon::prelude::*;

/// Runs `collector` over `items` on a dedicated pool of `config.jobs`
/// threads.
///
/// Inputs shorter than `config.min_parallel_len`, or `jobs == 1`, are folded
/// on the calling thread instead. Partial accumulators are always merged
/// left before right, so a run yields exactly what the sequential driver
/// yields, including which failure is reported when several elements fail.
///
/// Once an element fails, elements after it are dropped without being
/// accumulated. Elements before it are still accumulated, since one of them
/// may fail first.
///
/// # Errors
///
/// Returns [`CollectError::InvalidConfiguration`] for an invalid `config`,
/// [`CollectError::ThreadPoolCreation`] when the pool cannot be built, or
/// the first error raised by `accumulate`/`merge` in encounter order.
pub fn collect_parallel<T, C>(items: Vec<T>, collector: &C, config: &ExecutionConfig) -> Result<C::Output>
where
    T: Send,
    C: Collector<T> + Sync,
    C::Accumulator: Send,
{
    config.validate()?;
    if !config.runs_parallel(items.len()) {
        debug!("collecting {} items sequentially", items.len());
        return collect_sequential(items, collector);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| CollectError::ThreadPoolCreation {
            details: e.to_string(),
        })
        .with_context(|| format!("collecting {} items on {} threads", items.len(), config.jobs))?;

    debug!("collecting {} items on {} threads", items.len(), config.jobs);
    // Lowest index known to have failed; anything to its right cannot win.
    let first_failure = AtomicUsize::new(usize::MAX);
    let acc = pool.install(|| {
        items
            .into_par_iter()
            .enumerate()
            .fold(
                || Ok(collector.init()),
                |acc: Result<C::Accumulator>, (index, item): (usize, T)| -> Result<C::Accumulator> {
                    let mut acc = acc?;
                    if index > first_failure.load(Ordering::Relaxed) {
                        return Ok(acc);
                    }
                    if let Err(err) = collector.accumulate(&mut acc, item) {
                        debug!("item {index} failed, dropping items after it");
                        first_failure.fetch_min(index, Ordering::Relaxed);
                        return Err(err);
                    }
                    Ok(acc)
                },
            )
            .reduce(
                || Ok(collector.init()),
                |left, right| match (left, right) {
                    (Err(err), _) | (Ok(_), Err(err)) => Err(err),
                    (Ok(left), Ok(right)) => collector.merge(left, right),
                },
            )
    })?;

    Ok(collector.finish(acc))
}

// crates/domain/src/collectors/sorted_grouping.rs
use std::{collections::BTreeMap, marker::PhantomData};

use log::trace;
use ordered_collect_shared_kernel::{BoxError, CollectError, Result};

use crate::{collector::Collector, model::GroupedResult};

/// Groups elements under a derived, totally ordered key.
///
/// Produces a [`GroupedResult`] whose keys ascend and whose per-key values
/// keep encounter order, including across merged partial accumulators.
pub struct SortedGrouping<K, V, KF, VF> {
    key_fn: KF,
    value_fn: VF,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V, KF, VF> SortedGrouping<K, V, KF, VF> {
    /// Builds a grouping from fallible extraction functions. Prefer the
    /// `grouping_by_sorted_key*` constructors for infallible ones.
    pub fn new(key_fn: KF, value_fn: VF) -> Self {
        Self { key_fn, value_fn, _marker: PhantomData }
    }
}

impl<T, K, V, KF, VF> Collector<T> for SortedGrouping<K, V, KF, VF>
where
    K: Ord,
    KF: Fn(&T) -> Result<K>,
    VF: Fn(T) -> Result<V>,
{
    type Accumulator = BTreeMap<K, Vec<V>>;
    type Output = GroupedResult<K, V>;

    fn init(&self) -> Self::Accumulator {
        BTreeMap::new()
    }

    fn accumulate(&self, acc: &mut Self::Accumulator, item: T) -> Result<()> {
        let key = (self.key_fn)(&item)?;
        let value = (self.value_fn)(item)?;
        acc.entry(key).or_default().push(value);
        Ok(())
    }

    fn merge(&self, mut left: Self::Accumulator, right: Self::Accumulator) -> Result<Self::Accumulator> {
        if left.is_empty() {
            return Ok(right);
        }
        trace!("merging {} keys into {} keys", right.len(), left.len());
        for (key, values) in right {
            left.entry(key).or_default().extend(values);
        }
        Ok(left)
    }

    fn finish(&self, acc: Self::Accumulator) -> Self::Output {
        GroupedResult::from_groups(acc)
    }
}

/// Groups elements by `key_fn`, keeping the elements themselves as values.
pub fn grouping_by_sorted_key<T, K, F>(
    key_fn: F,
) -> SortedGrouping<K, T, impl Fn(&T) -> Result<K>, impl Fn(T) -> Result<T>>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    grouping_by_sorted_key_with(key_fn, |item: T| item)
}

/// Groups `value_fn(element)` under `key_fn(element)`.
pub fn grouping_by_sorted_key_with<T, K, V, KF, VF>(
    key_fn: KF,
    value_fn: VF,
) -> SortedGrouping<K, V, impl Fn(&T) -> Result<K>, impl Fn(T) -> Result<V>>
where
    K: Ord,
    KF: Fn(&T) -> K,
    VF: Fn(T) -> V,
{
    SortedGrouping::new(move |item: &T| Ok(key_fn(item)), move |item: T| Ok(value_fn(item)))
}

/// Groups elements by a fallible key function.
///
/// The first `Err` fails the whole reduction as
/// [`CollectError::KeyFunction`]; no partial grouping is returned.
pub fn try_grouping_by_sorted_key<T, K, E, F>(
    key_fn: F,
) -> SortedGrouping<K, T, impl Fn(&T) -> Result<K>, impl Fn(T) -> Result<T>>
where
    K: Ord,
    E: Into<BoxError>,
    F: Fn(&T) -> std::result::Result<K, E>,
{
    SortedGrouping::new(
        move |item: &T| key_fn(item).map_err(CollectError::key_function),
        |item: T| Ok(item),
    )
}

// crates/domain/src/model/grouped.rs
use std::{
    collections::{BTreeMap, btree_map},
    ops::Index,
};

use serde::Serialize;

/// キー昇順の多値マップ
///
/// An immutable mapping from each key to the values grouped under it. Keys
/// iterate in ascending order and are unique; each key's values keep the
/// encounter order of the sequence they were collected from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedResult<K, V> {
    groups: BTreeMap<K, Vec<V>>,
}

impl<K: Ord, V> GroupedResult<K, V> {
    pub(crate) fn from_groups(groups: BTreeMap<K, Vec<V>>) -> Self {
        Self { groups }
    }

    /// Values grouped under `key`, in encounter order.
    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of values across every key.
    pub fn total_values(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// Per-key value slices, in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &[V]> {
        self.groups.values().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(key, values)| (key, values.as_slice()))
    }

    /// Flattened `(key, value)` pairs: ascending by key, then encounter order.
    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.groups
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |value| (key, value)))
    }

    pub fn first_key(&self) -> Option<&K> {
        self.groups.keys().next()
    }

    pub fn last_key(&self) -> Option<&K> {
        self.groups.keys().next_back()
    }

    pub fn into_inner(self) -> BTreeMap<K, Vec<V>> {
        self.groups
    }
}

impl<K: Ord, V> Default for GroupedResult<K, V> {
    fn default() -> Self {
        Self { groups: BTreeMap::new() }
    }
}

impl<K: Ord, V> Index<&K> for GroupedResult<K, V> {
    type Output = [V];

    /// # Panics
    ///
    /// Panics if `key` has no group.
    fn index(&self, key: &K) -> &[V] {
        &self.groups[key]
    }
}

impl<K, V> IntoIterator for GroupedResult<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = btree_map::IntoIter<K, Vec<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

// crates/domain/src/model/resolved.rs
use std::ops::Deref;

use serde::Serialize;

/// Resolved values of a sequence of pending computations, one per input and
/// in input order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedResults<T> {
    values: Vec<T>,
}

impl<T> ResolvedResults<T> {
    pub(crate) fn from_values(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T> Default for ResolvedResults<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T> Deref for ResolvedResults<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.values
    }
}

impl<T> IntoIterator for ResolvedResults<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResolvedResults<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for ResolvedResults<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.values == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ResolvedResults<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.values == other
    }
}

use std::hash::{BuildHasher, Hash};
use std::iter::{Flatten, FusedIterator};
use std::slice::Iter as BucketIter;

use super::{Bucket, BucketMap};
use crate::collections::contiguous::vector::IntoIter as BucketIntoIter;

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for BucketMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

/// A type for owned iteration over the entries of a [`BucketMap`], bucket by bucket.
pub struct IntoIter<K, V> {
    pub(crate) inner: Flatten<BucketIntoIter<Bucket<K, V>>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a BucketMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.buckets.iter().flatten(),
        }
    }
}

/// A type for borrowed iteration over the entries of a [`BucketMap`], bucket by bucket.
pub struct Iter<'a, K, V> {
    pub(crate) inner: Flatten<BucketIter<'a, Bucket<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

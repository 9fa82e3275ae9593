use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use log::debug;

use super::{InvalidLoadFactor, Iter};
use crate::collections::contiguous::Vector;
use crate::collections::linked::LinkedList;

const DEFAULT_BUCKET_COUNT: usize = 10;
const DEFAULT_MAX_LOAD_FACTOR: f32 = 0.75;

const MIN_BUCKET_COUNT: usize = 1;

/// A single chain of entries which share a bucket index.
pub type Bucket<K, V> = LinkedList<(K, V)>;

/// The skeleton of a separately chained hash map: a fixed number of buckets, each of which is a
/// [`LinkedList`] of key-value pairs, and a [`BuildHasher`] to choose between them.
///
/// BucketMap only decides *where* an entry belongs. Callers place and look up entries themselves
/// through [`bucket`](BucketMap::bucket) and [`bucket_mut`](BucketMap::bucket_mut), and the map
/// never rehashes, so the maximum load factor is recorded but not enforced.
///
/// It is a logic error for a key to be modified in a way that changes its hash while it is in the
/// map.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the BucketMap.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `bucket_index` | `O(1)` |
/// | `bucket/bucket_mut` | `O(1)` |
/// | `len` | `O(b)` |
/// | `iter` | `O(n + b)` |
/// | `clear` | `O(n + b)` |
pub struct BucketMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Vector<Bucket<K, V>>,
    pub(crate) max_load_factor: f32,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> BucketMap<K, V, B> {
    /// Creates a new BucketMap with 10 buckets, a maximum load factor of 0.75 and the default
    /// value for `B`.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::hash::BucketMap;
    /// let map: BucketMap<&str, u8> = BucketMap::new();
    /// assert_eq!(map.bucket_count(), 10);
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> BucketMap<K, V, B> {
        BucketMap::with_buckets_and_hasher(DEFAULT_BUCKET_COUNT, B::default())
    }

    /// Creates a new BucketMap with `count` buckets (at least 1) and the default hasher.
    pub fn with_buckets(count: usize) -> BucketMap<K, V, B> {
        BucketMap::with_buckets_and_hasher(count, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> BucketMap<K, V, B> {
    /// Creates a new BucketMap with 10 buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> BucketMap<K, V, B> {
        BucketMap::with_buckets_and_hasher(DEFAULT_BUCKET_COUNT, hasher)
    }

    /// Creates a new BucketMap with `count` buckets (at least 1) and the provided `hasher`.
    pub fn with_buckets_and_hasher(count: usize, hasher: B) -> BucketMap<K, V, B> {
        BucketMap::build(count, DEFAULT_MAX_LOAD_FACTOR, hasher)
    }

    /// Creates a new BucketMap with every parameter specified.
    ///
    /// # Errors
    /// Returns [`InvalidLoadFactor`] if `max_load_factor` isn't finite and greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::hash::BucketMap;
    /// # use std::hash::RandomState;
    /// let map = BucketMap::<u8, u8>::with_config(4, 1.5, RandomState::new()).unwrap();
    /// assert_eq!(map.max_load_factor(), 1.5);
    /// assert!(BucketMap::<u8, u8>::with_config(4, 0.0, RandomState::new()).is_err());
    /// ```
    pub fn with_config(
        count: usize,
        max_load_factor: f32,
        hasher: B,
    ) -> Result<BucketMap<K, V, B>, InvalidLoadFactor> {
        if !max_load_factor.is_finite() || max_load_factor <= 0.0 {
            return Err(InvalidLoadFactor(max_load_factor));
        }
        Ok(BucketMap::build(count, max_load_factor, hasher))
    }

    fn build(count: usize, max_load_factor: f32, hasher: B) -> BucketMap<K, V, B> {
        let count = cmp::max(count, MIN_BUCKET_COUNT);
        let mut buckets = Vector::with_cap(count);
        for _ in 0..count {
            // SAFETY: buckets was created with capacity for exactly count lists.
            unsafe { buckets.push_unchecked(LinkedList::new()); }
        }

        debug!("BucketMap created with {count} buckets, max load factor {max_load_factor}");

        BucketMap {
            buckets,
            max_load_factor,
            hasher,
        }
    }

    /// Returns the number of buckets, which is fixed at construction.
    pub const fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub const fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Returns the total number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(LinkedList::len).sum()
    }

    /// Returns true if no bucket contains an entry.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(LinkedList::is_empty)
    }

    /// Returns the average number of entries per bucket.
    pub fn load_factor(&self) -> f32 {
        self.len() as f32 / self.bucket_count() as f32
    }

    /// Returns the index of the bucket that `key` belongs in: its hash modulo the bucket count.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        // The bucket count is at least 1 and the remainder is below it, so it fits in a usize.
        (self.hasher.hash_one(key) % self.bucket_count() as u64) as usize
    }

    /// Returns the bucket that `key` belongs in.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::hash::BucketMap;
    /// let mut map: BucketMap<&str, u32> = BucketMap::new();
    /// map.bucket_mut("answer").push_back(("answer", 42));
    /// assert_eq!(map.bucket("answer").front(), Ok(&("answer", 42)));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn bucket<Q>(&self, key: &Q) -> &Bucket<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        &self.buckets[self.bucket_index(key)]
    }

    /// Returns the bucket that `key` belongs in, allowing entries to be added or removed.
    pub fn bucket_mut<Q>(&mut self, key: &Q) -> &mut Bucket<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let index = self.bucket_index(key);
        &mut self.buckets[index]
    }

    /// Returns every bucket in index order.
    pub fn buckets(&self) -> &[Bucket<K, V>] {
        &self.buckets
    }

    /// Returns an iterator over all entries, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Removes every entry, keeping the number of buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        debug!("BucketMap cleared, {} buckets kept", self.bucket_count());
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for BucketMap<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for BucketMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

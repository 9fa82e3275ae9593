#![cfg(test)]

use std::hash::RandomState;

use super::*;
use crate::util::hash::{BadHasherBuilder, ManualHash};

#[test]
fn test_construction() {
    let map: BucketMap<u8, u8> = BucketMap::new();
    assert_eq!(map.bucket_count(), 10, "The default bucket count should be 10.");
    assert_eq!(map.max_load_factor(), 0.75);
    assert!(map.is_empty());
    assert_eq!(map.buckets().len(), 10);
    assert!(map.buckets().iter().all(|bucket| bucket.is_empty()));

    let map: BucketMap<u8, u8> = BucketMap::with_buckets(0);
    assert_eq!(map.bucket_count(), 1, "A map should always have at least one bucket.");

    let map: BucketMap<u8, u8, _> = BucketMap::with_buckets_and_hasher(3, BadHasherBuilder);
    assert_eq!(map.bucket_count(), 3);
    assert_eq!(map.buckets().len(), 3, "Building the buckets shouldn't shrink them.");
}

#[test]
fn test_invalid_load_factor() {
    for factor in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = BucketMap::<u8, u8>::with_config(5, factor, RandomState::new());
        assert!(result.is_err(), "A load factor of {factor} should be rejected.");
    }

    assert_eq!(
        BucketMap::<u8, u8>::with_config(5, -2.0, RandomState::new()).err(),
        Some(InvalidLoadFactor(-2.0))
    );

    let map = BucketMap::<u8, u8>::with_config(5, 2.5, RandomState::new()).unwrap();
    assert_eq!(map.max_load_factor(), 2.5);
    assert_eq!(map.bucket_count(), 5);
}

#[test]
fn test_bucket_index() {
    let map: BucketMap<ManualHash<&str>, u8, _> = BucketMap::with_hasher(BadHasherBuilder);
    assert_eq!(map.bucket_index(&ManualHash::new(0, "zero")), 0);
    assert_eq!(map.bucket_index(&ManualHash::new(7, "seven")), 7);
    assert_eq!(
        map.bucket_index(&ManualHash::new(23, "twenty three")),
        3,
        "The bucket index should be the hash modulo the bucket count."
    );

    let map: BucketMap<u64, u8, _> = BucketMap::with_buckets_and_hasher(1, BadHasherBuilder);
    assert_eq!(map.bucket_index(&12345), 0, "A single bucket should hold every key.");
}

#[test]
fn test_hash_collisions() {
    let mut map = BucketMap::with_buckets_and_hasher(4, BadHasherBuilder);
    for (hash, name) in [(1, "one"), (5, "five"), (2, "two"), (9, "nine")] {
        let key = ManualHash::new(hash, name);
        map.bucket_mut(&key).push_back((key, hash));
    }

    assert_eq!(map.len(), 4);
    assert_eq!(map.load_factor(), 1.0);

    let colliding = map.bucket(&ManualHash::new(1, "one"));
    assert_eq!(
        colliding.iter().map(|(key, _)| *key.value()).collect::<Vec<_>>(),
        ["one", "five", "nine"],
        "Keys with hashes equal modulo the bucket count should share a bucket, in insertion order."
    );
    assert_eq!(map.buckets()[2].len(), 1);
    assert!(map.buckets()[0].is_empty());
    assert!(map.buckets()[3].is_empty());

    let removed = map.bucket_mut(&ManualHash::new(5, "five")).pop_front();
    assert_eq!(removed.map(|(key, value)| (*key.value(), value)), Ok(("one", 1)));
    assert_eq!(map.len(), 3, "Removing through a bucket should be reflected in the map.");
}

#[test]
fn test_iter_and_clear() {
    let mut map = BucketMap::with_buckets_and_hasher(3, BadHasherBuilder);
    for key in [4_u64, 0, 2, 3] {
        map.bucket_mut(&key).push_back((key, key * 10));
    }

    let entries: Vec<_> = map.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(
        entries,
        [(0, 0), (3, 30), (4, 40), (2, 20)],
        "Entries should be visited bucket by bucket."
    );
    assert_eq!((&map).into_iter().count(), 4);

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), 3, "Clearing should keep the buckets.");
    map.clear();
    assert!(map.is_empty(), "Clearing an empty map should be a no-op.");
}

#[test]
fn test_into_iter() {
    let mut map = BucketMap::with_buckets_and_hasher(2, BadHasherBuilder);
    for key in [1_u64, 2, 3] {
        map.bucket_mut(&key).push_back((key, key.to_string()));
    }

    let entries: Vec<_> = map.into_iter().collect();
    assert_eq!(
        entries,
        [(2, "2".to_string()), (1, "1".to_string()), (3, "3".to_string())]
    );
}

#[test]
fn test_formatting() {
    let mut map = BucketMap::with_buckets_and_hasher(2, BadHasherBuilder);
    map.bucket_mut(&1_u64).push_back((1_u64, 'a'));
    map.bucket_mut(&2_u64).push_back((2_u64, 'b'));
    assert_eq!(format!("{map:?}"), "{2: 'b', 1: 'a'}");
}

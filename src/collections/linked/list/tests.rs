#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{EmptyCollection, IndexOutOfBounds};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop_ends() {
    let mut list = LinkedList::new();
    assert!(list.is_empty());

    list.push_back(2);
    assert_eq!(list.front(), list.back(), "A single node is both the front and the back.");
    list.push_back(3);
    list.push_front(1);
    list.push_front(0);
    list.verify_double_links();
    assert_eq!(list.len(), 4);
    assert_eq!(list.front(), Ok(&0));
    assert_eq!(list.back(), Ok(&3));

    assert_eq!(list.pop_front(), Ok(0));
    assert_eq!(list.pop_back(), Ok(3));
    list.verify_double_links();
    assert_eq!(list.front(), Ok(&1), "The new front should be the old second node.");
    assert_eq!(list.back(), Ok(&2), "The new back should be the old second last node.");

    assert_eq!(list.pop_back(), Ok(2));
    assert_eq!(list.pop_back(), Ok(1));
    assert!(list.is_empty());
    list.verify_double_links();
    assert_eq!(list.pop_back(), Err(EmptyCollection));
    assert_eq!(list.pop_front(), Err(EmptyCollection));
}

#[test]
fn test_round_trip() {
    let mut list = LinkedList::from([5, 6]);
    list.push_back(7);
    assert_eq!(list.back(), Ok(&7), "push_back should be visible at the back.");
    list.push_front(4);
    assert_eq!(list.front(), Ok(&4), "push_front should be visible at the front.");

    *list.front_mut().unwrap() = 40;
    *list.back_mut().unwrap() = 70;
    assert_eq!(list.to_string(), "(40) -> (5) -> (6) -> (70)");
}

#[test]
fn test_empty_errors() {
    let mut list = LinkedList::<u8>::new();
    assert_eq!(list.front(), Err(EmptyCollection));
    assert_eq!(list.back(), Err(EmptyCollection));
    assert_eq!(list.front_mut(), Err(EmptyCollection));
    assert_eq!(list.back_mut(), Err(EmptyCollection));
    assert_eq!(list.get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(list.len(), 0, "Failed operations shouldn't change the list.");

    list.clear();
    assert!(list.is_empty(), "Clearing an empty list should be a no-op.");
    list.verify_double_links();
}

#[test]
fn test_get_from_either_end() {
    let list: LinkedList<_> = (0..9).collect();
    for i in 0..9 {
        assert_eq!(list.get(i), Ok(&i), "Seeking to {i} should find the right node.");
        assert_eq!(list[i], i);
    }
    assert_eq!(list.get(9), Err(IndexOutOfBounds { index: 9, len: 9 }));

    let mut list = LinkedList::from([1, 3, 3, 7, 4, 2, 0]);
    assert_eq!(list.front(), Ok(&1));
    assert_eq!(list.back(), Ok(&0));
    assert_eq!(list.get(1), Ok(&3));

    *list.get_mut(5).unwrap() = 20;
    list[6] = 10;
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 3, 7, 4, 20, 10]);

    assert_panics!({
        let list = LinkedList::from([1, 2]);
        let _value = list[2];
    });
}

#[test]
fn test_node_reuse() {
    let mut list = LinkedList::from([1, 2, 3]);
    assert_eq!(list.nodes.slot_count(), 3);

    list.pop_front().unwrap();
    list.pop_back().unwrap();
    list.push_back(4);
    list.push_front(0);
    assert_eq!(list.nodes.slot_count(), 3, "Vacated slots should be reused before growing.");
    list.verify_double_links();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2, 4]);

    list.clear();
    assert_eq!(list.nodes.slot_count(), 0, "An emptied list should release its slots.");
    list.push_back(5);
    assert_eq!(list.front(), Ok(&5), "A cleared list should be reusable.");
}

#[test]
fn test_mixed_operations_keep_links() {
    let mut list = LinkedList::new();
    for i in 0..20 {
        if i % 3 == 0 {
            list.push_front(i);
        } else {
            list.push_back(i);
        }
        if i % 4 == 0 {
            list.pop_back().unwrap();
        }
        list.verify_double_links();
    }

    let forward: Vec<_> = list.iter().copied().collect();
    let mut backward: Vec<_> = list.iter().rev().copied().collect();
    backward.reverse();
    assert_eq!(forward, backward, "Both directions should visit the same nodes.");
    assert_eq!(forward.len(), list.len());
}

#[test]
fn test_iter() {
    let list = LinkedList::from([1, 2, 3, 4]);

    let mut iter = list.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None, "Both ends should meet exactly once.");
    assert_eq!(iter.next_back(), None);

    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
    assert!(LinkedList::<u8>::new().iter().next().is_none());
}

#[test]
fn test_iter_mut() {
    let mut list = LinkedList::from([1, 2, 3, 4, 5]);
    for value in &mut list {
        *value *= 10;
    }

    let mut iter = list.iter_mut();
    let first = iter.next().unwrap();
    let last = iter.next_back().unwrap();
    *first += 1;
    *last += 1;
    assert_eq!(iter.len(), 3);
    drop(iter);

    assert_eq!(list.to_string(), "(11) -> (20) -> (30) -> (40) -> (51)");
    list.verify_double_links();
}

#[test]
fn test_into_iter() {
    let list = LinkedList::from(['a', 'b', 'c']);
    let mut iter = list.into_iter();
    assert_eq!(iter.next_back(), Some('c'));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.collect::<String>(), "ab");

    let counter = CountedDrop::new();
    let list = LinkedList::from([counter.clone(), counter.clone(), counter.clone()]);
    let mut iter = list.into_iter();
    drop(iter.next());
    assert_eq!(counter.count(), 1);
    drop(iter);
    assert_eq!(counter.count(), 3, "Unread values should be dropped with the iterator.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list = LinkedList::new();
    for _ in 0..4 {
        list.push_back(counter.clone());
    }

    drop(list.pop_front().unwrap());
    assert_eq!(counter.count(), 1);

    list.clear();
    assert_eq!(counter.count(), 4, "Clearing should drop every value.");

    list.push_back(counter.clone());
    list.push_front(counter.clone());
    drop(list);
    assert_eq!(counter.count(), 6, "Dropping the list should drop every value exactly once.");
}

#[test]
fn test_zst_support() {
    let mut list = LinkedList::new();
    for _ in 0..5 {
        list.push_back(ZeroSizedType);
    }
    assert_eq!(list.len(), 5);
    assert_eq!(list.get(3), Ok(&ZeroSizedType));
    assert_eq!(list.iter().count(), 5);
    list.verify_double_links();
}

#[test]
fn test_contains() {
    let list = LinkedList::from(["x", "y", "z"]);
    assert!(list.contains(&"y"));
    assert!(!list.contains(&"w"));
    assert_eq!(list.index_of(&"z"), Some(2));
}

#[test]
fn test_clone_equality_and_hash() {
    let list = LinkedList::from([1, 2, 3]);
    let cloned = list.clone();
    assert_eq!(list, cloned, "A clone should be equal to the original.");
    cloned.verify_double_links();

    assert_ne!(list, LinkedList::from([1, 2]));
    assert_ne!(list, LinkedList::from([1, 2, 4]));

    let mut reused = LinkedList::from([0, 0, 1]);
    reused.pop_front().unwrap();
    reused.pop_front().unwrap();
    reused.push_back(2);
    reused.push_back(3);
    assert_eq!(list, reused, "Equality shouldn't depend on the layout of the nodes.");

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(&reused));
}

#[test]
fn test_formatting() {
    let list = LinkedList::from([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "LinkedList { contents: [1, 2, 3], len: 3 }");
    assert_eq!(format!("{}", LinkedList::<u8>::new()), "()");
}

#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let arr = Array::from([ZeroSizedType; 5]);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let mut arr = arr.forget_init();
    let old_ptr = arr.ptr;

    arr.realloc(30);
    assert_eq!(arr.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(arr.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = Array::from([0_usize, 1, 2, 3, 4]).forget_init();
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(10);
    for (i, slot) in arr.iter_mut().enumerate().skip(5) {
        slot.write(i);
    }
    // SAFETY: The first five values were kept and the last five have just been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        "When growing, all elements should remain in the Array."
    );

    let mut arr = arr.forget_init();
    arr.realloc(3);
    // SAFETY: Shrinking keeps the first three values, usize has no drop glue to lose.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2], "When shrinking, the leading elements should be kept.");

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0);
    arr.realloc(2);
    arr[0].write(7);
    arr[1].write(8);
    // SAFETY: Both values have just been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[7, 8], "An Array should be reusable after being reallocated to size 0.");

    assert_panics!({
        let _ = Array::<u64>::new_uninit(usize::MAX);
    });
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let arr = Array::from([counter.clone(), counter.clone(), counter.clone()]);
    assert_eq!(counter.count(), 0);

    drop(arr);

    assert_eq!(counter.count(), 3, "3 elements should have been dropped.");

    let arr = Array::from([counter.clone(), counter.clone()]);
    let cloned = arr.clone();
    drop(arr);
    drop(cloned);
    assert_eq!(counter.count(), 7, "Clones should be dropped independently.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from([0_usize, 1, 2, 3, 4]);

    assert_eq!(arr, arr.clone(), "A clone should be equal to the original.");
    assert_ne!(Array::from([0, 1, 2, 5, 4]), Array::from([0, 1, 2, 3, 4]));

    assert_eq!(
        Borrow::<[usize]>::borrow(&arr),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from([0_usize, 1, 2, 3, 4])),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4].as_slice()),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_formatting() {
    let arr = Array::from([1, 2, 3]);
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
    assert_eq!(format!("{arr:?}"), "Array { contents: [1, 2, 3], size: 3 }");
    assert_eq!(format!("{:?}", Array::<u8>::new()), "Array { contents: [], size: 0 }");
}

use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use log::trace;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// The smallest capacity a Vector will ever have. A Vector never deallocates entirely, so that
/// doubling the capacity always represents growth.
const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;
const SHRINK_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// The capacity of a Vector follows its length in both directions. Before an element is added to
/// a full Vector the capacity is doubled, and after any operation that leaves the length below
/// half of the capacity, the capacity is halved. The capacity never drops below 1.
///
/// There is no gap between the two thresholds, so a Vector sitting at exactly half capacity can
/// alternate between growing and shrinking if elements are repeatedly added and removed at that
/// boundary. [`adjust_cap`](Vector::adjust_cap) can be used to take manual control.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `push_front` | `O(n)` |
/// | `pop_back` | `O(1)`*, `O(n)` |
/// | `pop_front` | `O(n)` |
/// | `insert` | `O(n-i)`, `O(n)` |
/// | `remove` | `O(n-i)`, `O(n)` |
/// | `set` | `O(1)` |
/// | `adjust_cap` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized. If the Vector needs to grow or shrink as a result of the operation, it will take
/// `O(n)` to reallocate.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length 0 and capacity 1.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(MIN_CAP)
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, or 1 if `cap` is 0.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// assert_eq!(Vector::<u8>::with_cap(0).cap(), 1);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cmp::max(cap, MIN_CAP)),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector, which is always at least 1.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 3, 3, 7]);
    /// assert_eq!(vec.get(3), Ok(&7));
    /// assert!(vec.get(4).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is < len and all values < len are initialized.
        Ok(unsafe { self.arr[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is < len and all values < len are initialized.
        Ok(unsafe { self.arr[index].assume_init_mut() })
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.get(0).map_err(|_| EmptyCollection)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.get_mut(0).map_err(|_| EmptyCollection)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        let index = self.last_index()?;
        self.get(index).map_err(|_| EmptyCollection)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        let index = self.last_index()?;
        self.get_mut(index).map_err(|_| EmptyCollection)
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`, in which case `value` is dropped and the
    /// Vector is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::from([2, 3, 5]);
    /// assert_eq!(vec.set(1, 4), Ok(3));
    /// assert_eq!(&*vec, &[2, 4, 5]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.get_mut(index)?, value))
    }

    /// Replaces the first element with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn set_front(&mut self, value: T) -> Result<T, EmptyCollection> {
        Ok(mem::replace(self.front_mut()?, value))
    }

    /// Replaces the last element with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn set_back(&mut self, value: T) -> Result<T, EmptyCollection> {
        Ok(mem::replace(self.back_mut()?, value))
    }

    /// Push the provided value onto the end of the Vector, doubling the capacity first if the
    /// Vector is full.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=4 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.expand_if_needed();
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        self.contract_if_needed();
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so. No growth or shrinking is performed.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using [`with_cap`](Vector::with_cap) or
    /// [`adjust_cap`](Vector::adjust_cap). Using this method on a full Vector is undefined
    /// behavior.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::with_cap(3);
    /// for i in 1..=3 {
    ///     // SAFETY: vec has enough capacity to store all three elements.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Inserts `value` at the front of the Vector, moving every other element back by one.
    pub fn push_front(&mut self, value: T) {
        // SAFETY: 0 <= len is always a valid insertion index.
        unsafe { self.insert_unchecked(0, value) }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// `index == len` is valid and appends to the end.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`. The Vector is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100).unwrap();
    /// vec.insert(1, 200).unwrap();
    /// vec.insert(5, 300).unwrap();
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// assert!(vec.insert(7, 400).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: index has just been checked to be <= len.
        unsafe { self.insert_unchecked(index, value) }
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap
    /// and shrinking the Vector if it is now less than half full.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`. The Vector is left untouched.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), Ok('e'));
    /// assert_eq!(vec.remove(4), Ok(' '));
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index has just been checked to be < len.
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// Removes and returns the first element, moving all other elements forward.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        if self.is_empty() {
            return Err(EmptyCollection);
        }
        // SAFETY: The Vector isn't empty, so 0 < len.
        Ok(unsafe { self.remove_unchecked(0) })
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Vector is empty.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop_back(), Ok(i));
    /// }
    /// assert!(vec.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        let index = self.last_index()?;
        // SAFETY: index is the last valid index of a non-empty Vector.
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// Adjusts the capacity of the Vector to exactly `new_cap` (or 1 if `new_cap` is 0), dropping
    /// elements from the back if the Vector no longer fits. Remaining elements keep their order.
    ///
    /// This bypasses the automatic growth and shrinking, although the next operation which changes
    /// the length will apply it again.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 3, 5, 7, 9]);
    /// vec.adjust_cap(3);
    /// assert_eq!(&*vec, &[1, 3, 5]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn adjust_cap(&mut self, new_cap: usize) {
        let new_cap = cmp::max(new_cap, MIN_CAP);
        self.truncate(new_cap);
        self.realloc_with_cap(new_cap);
    }

    /// Drops every element and resets the capacity to 1.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 3, 3, 7]);
    /// vec.clear();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 1);
    /// ```
    pub fn clear(&mut self) {
        self.truncate(0);
        self.realloc_with_cap(MIN_CAP);
    }

    /// Drops all elements at or after `new_len`, if there are any.
    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let old_len = self.len;
        // Update len first, so that a panicking drop can't lead to a double drop.
        self.len = new_len;

        // SAFETY: Values in new_len..old_len are initialized, and are no longer tracked by len.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(new_len).as_ptr().cast::<T>(),
                old_len - new_len,
            ));
        }
    }

    /// Inserts `value` at `index`, applying growth before and shrinking after.
    ///
    /// # Safety
    /// `index` must be <= len.
    unsafe fn insert_unchecked(&mut self, index: usize, value: T) {
        self.expand_if_needed();

        // SAFETY: The capacity is now > len, so shifting len - index values back by one stays
        // within the allocation. ptr::copy handles the overlap.
        unsafe {
            let base = self.arr.ptr.as_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            base.add(index).write(MaybeUninit::new(value));
        }
        self.len += 1;

        self.contract_if_needed();
    }

    /// Removes and returns the value at `index`, then applies shrinking.
    ///
    /// # Safety
    /// `index` must be < len.
    unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        // SAFETY: index < len, so the value is initialized. It is moved out bitwise and the slot is
        // overwritten below, so it is never dropped twice.
        let value = unsafe {
            let base = self.arr.ptr.as_ptr();
            let value = base.add(index).read().assume_init();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };
        self.len -= 1;

        self.contract_if_needed();
        value
    }

    /// Doubles the capacity if there isn't room for another element.
    ///
    /// # Panics
    /// Panics if the new capacity overflows.
    fn expand_if_needed(&mut self) {
        if self.len == self.cap() {
            let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
            self.realloc_with_cap(new_cap);
        }
    }

    /// Halves the capacity if less than half of it is in use.
    fn contract_if_needed(&mut self) {
        if self.len < self.cap() / SHRINK_FACTOR {
            self.realloc_with_cap(self.cap() / SHRINK_FACTOR);
        }
    }

    /// Reallocates the internal Array with the provided capacity. All values beyond `new_cap`
    /// must already have been dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        if new_cap != self.cap() {
            trace!(
                "Vector reallocating from capacity {} to {} (len {})",
                self.cap(),
                new_cap,
                self.len,
            );
        }
        self.arr.realloc(new_cap);
    }

    /// Returns a pointer to the start of the buffer, valid for reads of `len` initialized values.
    pub(crate) fn as_non_null(&mut self) -> NonNull<T> {
        self.arr.ptr.cast()
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    pub(crate) const fn last_index(&self) -> Result<usize, EmptyCollection> {
        match self.len.checked_sub(1) {
            Some(index) => Ok(index),
            None => Err(EmptyCollection),
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector containing the values of the provided array, with capacity exactly `N` (or
    /// 1 for an empty array).
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::with_cap(N);

        for item in value {
            // SAFETY: vec has been created with the right capacity.
            unsafe { vec.push_unchecked(item); }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        self.truncate(0);

        // Implicitly drop self.arr, containing only MaybeUninit values without a no-op drop.
        // Doing so also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull, properly aligned and the range entirely contained within this Vector.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and self is borrowed mutably so the slice is unique.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    /// Clones every element into a new Vector with the same capacity.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let contents: &[T] = self;
        f.debug_struct("Vector")
            .field("contents", &contents)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

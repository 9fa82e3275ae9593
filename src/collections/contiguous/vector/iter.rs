use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::{ptr, slice};

use super::Vector;
use crate::collections::contiguous::Array;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = self.len;
        // Take the buffer and forget about self, the iterator is now responsible for the values.
        let arr = mem::take(&mut self.arr);
        mem::forget(self);

        IntoIter {
            arr,
            start: 0,
            end,
        }
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Values which haven't been yielded are dropped along with the iterator.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: All values in start..end are initialized and haven't been read yet. start is
            // incremented immediately, so the value is effectively moved off of the heap.
            let value = unsafe { self.arr[self.start].assume_init_read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and still refers to an unread initialized
            // value.
            Some(unsafe { self.arr[self.end].assume_init_read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end are initialized and have not been yielded. The remaining
        // Array only holds MaybeUninit values, so nothing is dropped twice.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(self.start).as_ptr().cast::<T>(),
                self.end - self.start,
            ));
        }
    }
}

// Borrowed iteration uses the slice iterators provided by Deref<Target = [T]>.

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use ListState::*;

use super::{LinkedList, ListContents, ListState, Node, NodeArena, NodeIndex, Slot};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// A type for owned iteration over a [`LinkedList`]. Values which haven't been yielded are dropped
/// along with the iterator.
pub struct IntoIter<T> {
    // The iterator can just hold the list and pop from either end.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            nodes: &self.nodes,
            state: self.state,
        }
    }
}

/// A type for borrowed iteration over a [`LinkedList`], from either end.
pub struct Iter<'a, T> {
    // A copy of the list's state, which is consumed from both ends while the nodes are left
    // untouched. len tracks the number of items left to yield.
    pub(crate) nodes: &'a NodeArena<T>,
    pub(crate) state: ListState,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = nodes.node(*head);

                match len.checked_sub(1) {
                    Some(new_len) => {
                        *head = node.next.unreachable();
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&node.value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = nodes.node(*tail);

                match len.checked_sub(1) {
                    Some(new_len) => {
                        *tail = node.prev.unreachable();
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(&node.value)
            },
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            state: self.state,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            slots: self.nodes.as_non_null(),
            state: self.state,
            _phantom: PhantomData,
        }
    }
}

/// A type for mutable iteration over a [`LinkedList`], from either end.
pub struct IterMut<'a, T> {
    // Every node is visited at most once between both ends, so each mutable reference handed out
    // is unique. The list is mutably borrowed for 'a, so the slots can't move in the meantime.
    pub(crate) slots: NonNull<Slot<T>>,
    pub(crate) state: ListState,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    /// `index` must refer to an occupied slot of the borrowed list which hasn't been yielded yet.
    #[allow(clippy::mut_from_ref)]
    unsafe fn node(&self, index: NodeIndex) -> &'a mut Node<T> {
        // SAFETY: The caller guarantees that the slot is in bounds and that no other reference to
        // it exists.
        let slot = unsafe { &mut *self.slots.as_ptr().add(index.0) };
        slot.as_node_mut().unreachable()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            Empty => None,
            Full(ListContents { len, head, tail }) => {
                // SAFETY: head is part of the remaining range, which no previous call has visited.
                let node = unsafe { self.node(head) };

                self.state = match len.checked_sub(1) {
                    Some(new_len) => Full(ListContents {
                        len: new_len,
                        head: node.next.unreachable(),
                        tail,
                    }),
                    None => Empty,
                };

                Some(&mut node.value)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.state {
            Empty => None,
            Full(ListContents { len, head, tail }) => {
                // SAFETY: tail is part of the remaining range, which no previous call has visited.
                let node = unsafe { self.node(tail) };

                self.state = match len.checked_sub(1) {
                    Some(new_len) => Full(ListContents {
                        len: new_len,
                        head,
                        tail: node.prev.unreachable(),
                    }),
                    None => Empty,
                };

                Some(&mut node.value)
            },
        }
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

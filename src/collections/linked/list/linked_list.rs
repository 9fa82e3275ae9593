use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodeArena, NodeIndex, ONE};
use crate::collections::contiguous::Vector;
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`Cursor`](crate::collections::linked::Cursor)
/// for bi-directional traversal.
///
/// Nodes live in an index-based arena owned by the list rather than in individual allocations, so
/// links never own the nodes they point to. Freed slots are reused by later pushes, and the arena
/// is reset whenever the list becomes empty.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `clear` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized, the arena occasionally grows.
///
/// As a general note, modern computer architecture isn't kind to linked lists because all `O(i)`
/// or `O(n)` operations consist primarily of cache misses. For this reason, [`Vector`] should be
/// preferred unless the `O(1)` end operations are being heavily utilized.
pub struct LinkedList<T> {
    pub(crate) nodes: NodeArena<T>,
    pub(crate) state: ListState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum ListState {
    #[default]
    Empty,
    Full(ListContents),
}

use ListState::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListContents {
    pub len: Length,
    pub head: NodeIndex,
    pub tail: NodeIndex,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            nodes: NodeArena::new(),
            state: Empty,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(&self.nodes.node(head).value),
        }
    }

    /// Returns a mutable reference to the first element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { head, .. }) => Ok(&mut self.nodes.node_mut(head).value),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn back(&self) -> Result<&T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { tail, .. }) => Ok(&self.nodes.node(tail).value),
        }
    }

    /// Returns a mutable reference to the last element in the list.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        match self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { tail, .. }) => Ok(&mut self.nodes.node_mut(tail).value),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// assert_eq!(list.back(), Ok(&2));
    /// ```
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = Full(ListContents::wrap_one(&mut self.nodes, value)),
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = self.nodes.insert(Node {
                    value,
                    prev: None,
                    next: Some(contents.head),
                });

                self.nodes.node_mut(contents.head).prev = Some(node);
                contents.head = node;
                contents.len = len;
            },
        }
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.to_string(), "(1) -> (2)");
    /// ```
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = Full(ListContents::wrap_one(&mut self.nodes, value)),
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

                let node = self.nodes.insert(Node {
                    value,
                    prev: Some(contents.tail),
                    next: None,
                });

                self.nodes.node_mut(contents.tail).next = Some(node);
                contents.tail = node;
                contents.len = len;
            },
        }
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        match &mut self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { len, head, .. }) => {
                let node = self.nodes.take(*head);

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // A list longer than one has a node after the head.
                        let new_head = node.next.unreachable();
                        self.nodes.node_mut(new_head).prev = None;
                        *head = new_head;
                        *len = new_len;
                    },
                    None => self.reset(),
                }

                Ok(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.pop_back(), Ok(2));
    /// assert_eq!(list.pop_back(), Ok(1));
    /// assert!(list.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        match &mut self.state {
            Empty => Err(EmptyCollection),
            Full(ListContents { len, tail, .. }) => {
                let node = self.nodes.take(*tail);

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // A list longer than one has a node before the tail.
                        let new_tail = node.prev.unreachable();
                        self.nodes.node_mut(new_tail).next = None;
                        *tail = new_tail;
                        *len = new_len;
                    },
                    None => self.reset(),
                }

                Ok(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, walking from whichever end of
    /// the list is closer.
    ///
    /// The same functionality can be achieved using the [`Index`] operator, which panics instead.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::linked::LinkedList;
    /// let list = LinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list[2], 'c');
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(&self.nodes.node(node).value)
    }

    /// Returns a mutable reference to the element at the provided `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(&mut self.nodes.node_mut(node).value)
    }

    /// Removes every element from the back of the list until it is empty.
    pub fn clear(&mut self) {
        while self.pop_back().is_ok() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Drops what remains of the arena once the last node has been taken.
    fn reset(&mut self) {
        self.state = Empty;
        self.nodes.clear();
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeIndex, IndexOutOfBounds> {
        match self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents.seek(&self.nodes, index))
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => assert_eq!(self.nodes.slot_count(), 0, "An empty list should hold no nodes."),
            Full(ListContents { len, head, tail }) => {
                assert_eq!(self.nodes.node(head).prev, None);
                let mut count = 1;
                let mut curr = head;
                while let Some(next) = self.nodes.node(curr).next {
                    assert_eq!(self.nodes.node(next).prev, Some(curr));
                    curr = next;
                    count += 1;
                }
                assert_eq!(tail, curr);
                assert_eq!(len.get(), count);
            },
        }
    }
}

impl ListContents {
    pub fn seek<T>(&self, nodes: &NodeArena<T>, index: usize) -> NodeIndex {
        if index < self.len.get() / 2 {
            Self::seek_fwd(nodes, index, self.head)
        } else {
            Self::seek_bwd(nodes, self.last_index() - index, self.tail)
        }
    }

    fn seek_fwd<T>(nodes: &NodeArena<T>, count: usize, mut node: NodeIndex) -> NodeIndex {
        for _ in 0..count {
            node = nodes.node(node).next.unreachable();
        }
        node
    }

    fn seek_bwd<T>(nodes: &NodeArena<T>, count: usize, mut node: NodeIndex) -> NodeIndex {
        for _ in 0..count {
            node = nodes.node(node).prev.unreachable();
        }
        node
    }

    pub fn wrap_one<T>(nodes: &mut NodeArena<T>, value: T) -> ListContents {
        let node = nodes.insert(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl ListState {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).throw()
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).throw()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF_u8.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &Contents(self))
            .field("len", &self.len())
            .finish()
    }
}

/// Formats the values of a list without its surrounding struct.
struct Contents<'a, T>(&'a LinkedList<T>);

impl<T: Debug> Debug for Contents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}

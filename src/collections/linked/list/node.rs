use std::mem;
use std::ptr::NonNull;

use crate::collections::contiguous::Vector;
use crate::util::option::OptionExtension;

/// The position of a node within a [`NodeArena`]. Indices stay valid until the node is taken or
/// the arena is cleared, regardless of reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(pub usize);

pub(crate) type Link = Option<NodeIndex>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link,
    pub next: Link,
}

pub(crate) enum Slot<T> {
    Occupied(Node<T>),
    Vacant {
        next_free: Link,
    },
}

impl<T> Slot<T> {
    pub const fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub const fn as_node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }
}

/// Backing storage for the nodes of a [`LinkedList`](super::LinkedList).
///
/// Nodes refer to each other by index rather than by pointer, so no node owns its neighbours and
/// dropping the arena drops each value exactly once, without recursion. Vacated slots form a
/// singly linked free list through `next_free` and are reused before the arena grows.
pub(crate) struct NodeArena<T> {
    slots: Vector<Slot<T>>,
    free: Link,
}

impl<T> NodeArena<T> {
    pub fn new() -> NodeArena<T> {
        NodeArena {
            slots: Vector::new(),
            free: None,
        }
    }

    /// Stores `node`, reusing a vacant slot if there is one, and returns its index.
    pub fn insert(&mut self, node: Node<T>) -> NodeIndex {
        match self.free {
            Some(index) => {
                let slot = self.slots.get_mut(index.0).ok().unreachable();
                match mem::replace(slot, Slot::Occupied(node)) {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free list pointed at an occupied slot"),
                }
                index
            },
            None => {
                let index = NodeIndex(self.slots.len());
                self.slots.push_back(Slot::Occupied(node));
                index
            },
        }
    }

    /// Moves the node at `index` out of the arena, marking its slot as free.
    pub fn take(&mut self, index: NodeIndex) -> Node<T> {
        let slot = self.slots.get_mut(index.0).ok().unreachable();
        match mem::replace(slot, Slot::Vacant { next_free: self.free }) {
            Slot::Occupied(node) => {
                self.free = Some(index);
                node
            },
            Slot::Vacant { .. } => unreachable!("attempted to take a vacant node"),
        }
    }

    pub fn node(&self, index: NodeIndex) -> &Node<T> {
        self.slots.get(index.0).ok().and_then(Slot::as_node).unreachable()
    }

    pub fn node_mut(&mut self, index: NodeIndex) -> &mut Node<T> {
        self.slots.get_mut(index.0).ok().and_then(Slot::as_node_mut).unreachable()
    }

    /// Drops every remaining node and resets the storage.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    /// Returns a pointer to the first slot, for iterators which hand out disjoint mutable
    /// references to multiple nodes at once.
    pub fn as_non_null(&mut self) -> NonNull<Slot<T>> {
        self.slots.as_non_null()
    }

    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

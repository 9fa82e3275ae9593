use std::fmt::{self, Debug, Formatter};
use std::ptr;

use derive_more::IsVariant;

use super::State;
use crate::collections::linked::list::{LinkedList, ListContents, ListState, NodeIndex};
use crate::util::error::CursorOutOfBounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum CursorPosition {
    Head,
    Tail,
    Node {
        node: NodeIndex,
        index: usize,
    },
}

use CursorPosition::*;

impl CursorPosition {
    /// The first node of the list, or `Tail` if there isn't one.
    fn front(state: ListState) -> CursorPosition {
        match state {
            ListState::Empty => Tail,
            ListState::Full(ListContents { head, .. }) => Node {
                node: head,
                index: 0,
            },
        }
    }

    /// The last node of the list, or `Head` if there isn't one.
    fn back(state: ListState) -> CursorPosition {
        match state {
            ListState::Empty => Head,
            ListState::Full(contents) => Node {
                node: contents.tail,
                index: contents.last_index(),
            },
        }
    }

    fn next<T>(self, list: &LinkedList<T>) -> Result<CursorPosition, CursorOutOfBounds> {
        match self {
            Head => Ok(CursorPosition::front(list.state)),
            Tail => Err(CursorOutOfBounds),
            Node { node, index } => Ok(match list.nodes.node(node).next {
                Some(next) => Node {
                    node: next,
                    index: index + 1,
                },
                None => Tail,
            }),
        }
    }

    fn prev<T>(self, list: &LinkedList<T>) -> Result<CursorPosition, CursorOutOfBounds> {
        match self {
            Head => Err(CursorOutOfBounds),
            Tail => Ok(CursorPosition::back(list.state)),
            Node { node, index } => Ok(match list.nodes.node(node).prev {
                Some(prev) => Node {
                    node: prev,
                    // A node with a predecessor is never at index 0.
                    index: index - 1,
                },
                None => Head,
            }),
        }
    }

    const fn index(self) -> Option<usize> {
        match self {
            Head | Tail => None,
            Node { index, .. } => Some(index),
        }
    }
}

impl<T> LinkedList<T> {
    /// Returns a cursor pointing at the first element, or at the `Tail` ghost if the list is
    /// empty. Moving it forward visits every element in order.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::linked::{LinkedList, cursor::State};
    /// let list = LinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_front();
    /// let mut seen = Vec::new();
    /// while let State::Node(value) = cursor.state() {
    ///     seen.push(*value);
    ///     cursor.move_next().unwrap();
    /// }
    /// assert_eq!(seen, [1, 2, 3]);
    /// assert_eq!(cursor, list.cursor_tail());
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: CursorPosition::front(self.state),
        }
    }

    /// Returns a cursor pointing at the last element, or at the `Head` ghost if the list is empty.
    /// Moving it backward visits every element in reverse order.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: CursorPosition::back(self.state),
        }
    }

    /// Returns a cursor pointing at the ghost position before the first element.
    pub fn cursor_head(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Head,
        }
    }

    /// Returns a cursor pointing at the ghost position after the last element.
    pub fn cursor_tail(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            pos: Tail,
        }
    }

    /// The same as [`cursor_front`](LinkedList::cursor_front), with mutable access to elements.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = CursorPosition::front(self.state);
        CursorMut {
            list: self,
            pos,
        }
    }

    /// The same as [`cursor_back`](LinkedList::cursor_back), with mutable access to elements.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let pos = CursorPosition::back(self.state);
        CursorMut {
            list: self,
            pos,
        }
    }
}

/// A type for bi-directional traversal of a [`LinkedList`]. See [`LinkedList::cursor_front`] and
/// [`LinkedList::cursor_back`] to create one.
///
/// A cursor either points at a node or at one of two 'ghost' positions: `Head`, before the first
/// node, and `Tail`, after the last one. Moving beyond a ghost or reading from one fails with
/// [`CursorOutOfBounds`].
///
/// The cursor borrows the list, so the list can't be structurally modified while it is in use.
pub struct Cursor<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) pos: CursorPosition,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the index of the node under the cursor, or None for a ghost position.
    pub const fn index(&self) -> Option<usize> {
        self.pos.index()
    }

    /// Returns the current position and the value under it, if any.
    pub fn state(&self) -> State<'a, T> {
        match self.pos {
            Head => State::Head,
            Tail => State::Tail,
            Node { node, .. } => State::Node(&self.list.nodes.node(node).value),
        }
    }

    /// Returns the value under the cursor.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is on a ghost position.
    pub fn current(&self) -> Result<&'a T, CursorOutOfBounds> {
        match self.state() {
            State::Node(value) => Ok(value),
            State::Head | State::Tail => Err(CursorOutOfBounds),
        }
    }

    /// Returns the value after the cursor without moving, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut next = *self;
        next.move_next().ok()?.current().ok()
    }

    /// Returns the value before the cursor without moving, if there is one.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut prev = *self;
        prev.move_prev().ok()?.current().ok()
    }

    /// Moves the cursor to the next node, or to `Tail` from the last node.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on `Tail`. The cursor doesn't move.
    pub fn move_next(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.next(self.list)?;
        Ok(self)
    }

    /// Moves the cursor to the previous node, or to `Head` from the first node.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on `Head`. The cursor doesn't move.
    pub fn move_prev(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.prev(self.list)?;
        Ok(self)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index())
            .field("state", &self.state())
            .finish()
    }
}

/// A cursor over a [`LinkedList`] which allows the value under it to be modified. See [`Cursor`].
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) pos: CursorPosition,
}

impl<T> CursorMut<'_, T> {
    pub const fn index(&self) -> Option<usize> {
        self.pos.index()
    }

    pub fn state(&self) -> State<'_, T> {
        self.as_cursor().state()
    }

    /// Returns the value under the cursor.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is on a ghost position.
    pub fn current(&self) -> Result<&T, CursorOutOfBounds> {
        self.as_cursor().current()
    }

    /// Returns a mutable reference to the value under the cursor.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is on a ghost position.
    pub fn current_mut(&mut self) -> Result<&mut T, CursorOutOfBounds> {
        match self.pos {
            Node { node, .. } => Ok(&mut self.list.nodes.node_mut(node).value),
            Head | Tail => Err(CursorOutOfBounds),
        }
    }

    /// Moves the cursor to the next node, or to `Tail` from the last node.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on `Tail`.
    pub fn move_next(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.next(self.list)?;
        Ok(self)
    }

    /// Moves the cursor to the previous node, or to `Head` from the first node.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on `Head`.
    pub fn move_prev(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.prev(self.list)?;
        Ok(self)
    }

    /// Reborrows this cursor as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: &*self.list,
            pos: self.pos,
        }
    }
}

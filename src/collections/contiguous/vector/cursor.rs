use std::fmt::{self, Debug, Formatter};
use std::ptr;

use derive_more::IsVariant;

use super::Vector;
use crate::util::error::CursorOutOfBounds;

/// The position of a [`Cursor`] or [`CursorMut`] within a [`Vector`].
///
/// `Head` and `Tail` are 'ghost' positions one before the first slot and one after the last slot
/// respectively. They can be compared against but never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Position {
    /// The ghost position before the first element.
    Head,
    /// An element, by index.
    Index(usize),
    /// The ghost position after the last element.
    Tail,
}

impl Position {
    /// The first element, or `Tail` if there isn't one.
    pub(crate) const fn first(len: usize) -> Position {
        if len == 0 {
            Position::Tail
        } else {
            Position::Index(0)
        }
    }

    /// The last element, or `Head` if there isn't one.
    pub(crate) const fn last(len: usize) -> Position {
        match len.checked_sub(1) {
            Some(index) => Position::Index(index),
            None => Position::Head,
        }
    }

    pub(crate) const fn next(self, len: usize) -> Result<Position, CursorOutOfBounds> {
        match self {
            Position::Head => Ok(Position::first(len)),
            Position::Index(index) if index + 1 < len => Ok(Position::Index(index + 1)),
            Position::Index(_) => Ok(Position::Tail),
            Position::Tail => Err(CursorOutOfBounds),
        }
    }

    pub(crate) const fn prev(self, len: usize) -> Result<Position, CursorOutOfBounds> {
        match self {
            Position::Head => Err(CursorOutOfBounds),
            Position::Index(0) => Ok(Position::Head),
            Position::Index(index) => Ok(Position::Index(index - 1)),
            Position::Tail => Ok(Position::last(len)),
        }
    }
}

impl<T> Vector<T> {
    /// Returns a cursor pointing at the first element, or at the `Tail` ghost if the Vector is
    /// empty. Moving it forward visits every element in order.
    ///
    /// # Examples
    /// ```
    /// # use collection_core::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2]);
    /// let mut cursor = vec.cursor_front();
    /// assert_eq!(cursor.current(), Ok(&1));
    /// cursor.move_next().unwrap().move_next().unwrap();
    /// assert_eq!(cursor, vec.cursor_tail());
    /// assert!(cursor.current().is_err());
    /// assert!(cursor.move_next().is_err());
    /// ```
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor {
            vec: self,
            pos: Position::first(self.len),
        }
    }

    /// Returns a cursor pointing at the last element, or at the `Head` ghost if the Vector is
    /// empty. Moving it backward visits every element in reverse order.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor {
            vec: self,
            pos: Position::last(self.len),
        }
    }

    /// Returns a cursor pointing at the ghost position before the first element.
    pub fn cursor_head(&self) -> Cursor<'_, T> {
        Cursor {
            vec: self,
            pos: Position::Head,
        }
    }

    /// Returns a cursor pointing at the ghost position after the last element.
    pub fn cursor_tail(&self) -> Cursor<'_, T> {
        Cursor {
            vec: self,
            pos: Position::Tail,
        }
    }

    /// The same as [`cursor_front`](Vector::cursor_front), with mutable access to elements.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let pos = Position::first(self.len);
        CursorMut {
            vec: self,
            pos,
        }
    }

    /// The same as [`cursor_back`](Vector::cursor_back), with mutable access to elements.
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let pos = Position::last(self.len);
        CursorMut {
            vec: self,
            pos,
        }
    }
}

/// A read-only cursor over a [`Vector`], which can move in both directions and stop on the ghost
/// positions at either end.
///
/// The cursor borrows the Vector, so any structural change (which would invalidate a position)
/// requires the cursor to be dropped first.
pub struct Cursor<'a, T> {
    pub(crate) vec: &'a Vector<T>,
    pub(crate) pos: Position,
}

impl<'a, T> Cursor<'a, T> {
    /// Returns the position of the cursor.
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Returns the index of the current element, or None for a ghost position.
    pub const fn index(&self) -> Option<usize> {
        match self.pos {
            Position::Index(index) => Some(index),
            _ => None,
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is on a ghost position.
    pub fn current(&self) -> Result<&'a T, CursorOutOfBounds> {
        match self.pos {
            Position::Index(index) => self.vec.get(index).map_err(|_| CursorOutOfBounds),
            _ => Err(CursorOutOfBounds),
        }
    }

    /// Returns the element after the cursor without moving, if there is one.
    pub fn peek_next(&self) -> Option<&'a T> {
        let mut next = *self;
        next.move_next().ok()?.current().ok()
    }

    /// Returns the element before the cursor without moving, if there is one.
    pub fn peek_prev(&self) -> Option<&'a T> {
        let mut prev = *self;
        prev.move_prev().ok()?.current().ok()
    }

    /// Moves the cursor one position toward the back.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on the `Tail` ghost, in which case it
    /// doesn't move.
    pub fn move_next(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.next(self.vec.len())?;
        Ok(self)
    }

    /// Moves the cursor one position toward the front.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on the `Head` ghost, in which case it
    /// doesn't move.
    pub fn move_prev(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.prev(self.vec.len())?;
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
        ptr::eq(self.vec, other.vec) && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("current", &self.current().ok())
            .finish()
    }
}

/// A cursor over a [`Vector`] which allows the element under it to be modified. See [`Cursor`].
pub struct CursorMut<'a, T> {
    pub(crate) vec: &'a mut Vector<T>,
    pub(crate) pos: Position,
}

impl<T> CursorMut<'_, T> {
    /// Returns the position of the cursor.
    pub const fn position(&self) -> Position {
        self.pos
    }

    /// Returns the index of the current element, or None for a ghost position.
    pub const fn index(&self) -> Option<usize> {
        match self.pos {
            Position::Index(index) => Some(index),
            _ => None,
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is on a ghost position.
    pub fn current(&self) -> Result<&T, CursorOutOfBounds> {
        self.as_cursor().current()
    }

    /// Returns a mutable reference to the element under the cursor.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is on a ghost position.
    pub fn current_mut(&mut self) -> Result<&mut T, CursorOutOfBounds> {
        match self.pos {
            Position::Index(index) => self.vec.get_mut(index).map_err(|_| CursorOutOfBounds),
            _ => Err(CursorOutOfBounds),
        }
    }

    /// Moves the cursor one position toward the back.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on the `Tail` ghost.
    pub fn move_next(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.next(self.vec.len())?;
        Ok(self)
    }

    /// Moves the cursor one position toward the front.
    ///
    /// # Errors
    /// Returns [`CursorOutOfBounds`] if the cursor is already on the `Head` ghost.
    pub fn move_prev(&mut self) -> Result<&mut Self, CursorOutOfBounds> {
        self.pos = self.pos.prev(self.vec.len())?;
        Ok(self)
    }

    /// Reborrows this cursor as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            vec: &*self.vec,
            pos: self.pos,
        }
    }
}

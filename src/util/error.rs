use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was at or beyond the number of elements in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The front or back of a collection was accessed while it contained no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Attempted to access an element of an empty collection!")
    }
}

impl Error for EmptyCollection {}

/// A cursor was read while pointing at a ghost position, or moved beyond one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorOutOfBounds;

impl Display for CursorOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor moved or read beyond the bounds of its collection!")
    }
}

impl Error for CursorOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// Every way in which an access can fall outside of a collection. Each operation returns the
/// specific error it can produce, which converts into this type with `?` or [`From`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum OutOfRange {
    IndexOutOfBounds(IndexOutOfBounds),
    EmptyCollection(EmptyCollection),
    CursorOutOfBounds(CursorOutOfBounds),
}

//! Various general-purpose collection types.
//!
//! # Purpose
//! These types exist to learn about each of the data structures themselves, as well as
//! allocations, iterators and cursors.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves writing some of the more repetitive functionality. The other types build
//! on top of it.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;

#[doc(inline)]
pub use crate::util::error::{
    CapacityOverflow, CursorOutOfBounds, EmptyCollection, IndexOutOfBounds, OutOfRange,
};

//! A module containing [`Vector`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a Vector, while [`IterMut`](std::slice::IterMut) and
//! [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration. [`Cursor`] and
//! [`CursorMut`] walk a Vector in either direction, including the ghost positions at each end.
//!
//! [`Vector`] is also re-exported under the parent module.

mod cursor;
mod iter;
mod vector;

pub use cursor::*;
pub use iter::*;
pub use vector::*;

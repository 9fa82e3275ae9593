//! Contiguous collection types. Namely [`Array`] for a fixed size heap buffer and [`Vector`] for a
//! contiguous collection that grows and shrinks as elements are added and removed.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;

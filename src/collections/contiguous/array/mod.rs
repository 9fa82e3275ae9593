//! A module containing [`Array`], the owned buffer behind [`Vector`](super::Vector).
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used for
//! borrowed iteration.
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;

//! This crate is a small set of hand-written container types: a dynamic array, a doubly linked list
//! and the skeleton of a hash map built out of the other two.
//!
//! # Purpose
//! Writing these data structures is a way to understand them properly, in particular the growth
//! and shrink policy of a dynamic array and the bookkeeping of a list with links in both
//! directions. It isn't intended to replace [`std::vec::Vec`] or
//! [`std::collections::LinkedList`], although it tries to be written to a level where it could.
//!
//! # Method
//! [`Vector`](collections::contiguous::Vector) manages its own heap buffer through
//! [`Array`](collections::contiguous::Array), so the library itself never uses a [`Vec`].
//! [`LinkedList`](collections::linked::LinkedList) stores its nodes in a slot arena built on top
//! of that Vector, with neighbours referred to by index. This keeps the list free of ownership
//! cycles and of recursive drops.
//!
//! # Error Handling
//! Every operation that can fail returns a [`Result`] with a strongly typed error struct (usually
//! a ZST) that implements [`Error`](std::error::Error). All of them are a kind of
//! [`OutOfRange`](collections::OutOfRange), which can be used when a caller doesn't care which
//! boundary was hit. A failed operation never leaves a container partially modified.
//!
//! Capacity overflow is the exception, it panics, because nobody wants to handle an error every
//! time they push into a Vector.
//!
//! # Logging
//! Reallocations and map construction are reported through the [`log`] facade, at `trace` and
//! `debug` level respectively. No logger is installed by this crate.
//!
//! # Features
//! - `contiguous`: [`Array`](collections::contiguous::Array) and
//!   [`Vector`](collections::contiguous::Vector).
//! - `linked`: [`LinkedList`](collections::linked::LinkedList) and its cursors.
//! - `hash`: [`BucketMap`](collections::hash::BucketMap).
//! - `collections-all` (default): all of the above.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

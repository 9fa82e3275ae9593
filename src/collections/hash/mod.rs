//! Hash-based collection types. Currently this is only the [`BucketMap`] skeleton, which chains
//! entries into one [`LinkedList`](crate::collections::linked::LinkedList) per bucket.

pub mod map;

#[doc(inline)]
pub use map::BucketMap;

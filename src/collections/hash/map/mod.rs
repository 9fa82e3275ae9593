//! A module containing [`BucketMap`] and associated types.
//!
//! [`BucketMap`] is also re-exported under the parent module.

mod bucket_map;
mod error;
mod iter;
mod tests;

pub use bucket_map::*;
pub use error::*;
pub use iter::*;

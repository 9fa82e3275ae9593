//! Cursors over a [`LinkedList`](super::LinkedList), which traverse it in both directions and can
//! rest on a 'ghost' position at either end.

mod cursor;
mod state;

pub use cursor::*;
pub use state::*;

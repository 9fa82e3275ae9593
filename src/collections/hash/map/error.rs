use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// A maximum load factor was provided which wasn't a finite number greater than 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLoadFactor(pub f32);

impl Display for InvalidLoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid maximum load factor {} for hash-based collection!", self.0)
    }
}

impl Error for InvalidLoadFactor {}

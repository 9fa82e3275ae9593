pub(crate) trait OptionExtension<T> {
    /// Unwraps a value that the invariants of a collection guarantee to be present, such as the
    /// link to the next node of a list which is known to be longer than the current position.
    ///
    /// This is not `unsafe`, a broken invariant panics via [`unreachable!`] in all builds rather
    /// than becoming undefined behavior. No panics annotation is used because the whole semantics
    /// are that None is impossible.
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("collection invariant violated: missing linked value"),
        }
    }
}

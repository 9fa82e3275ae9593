/// An enum to represent the state of a [`Cursor`](super::Cursor).
#[derive(Debug, PartialEq, Eq)]
pub enum State<'a, T> {
    /// The cursor is pointing to the 'ghost' element before the start of a list.
    Head,
    /// The cursor is pointing to the 'ghost' element after the end of a list.
    Tail,
    /// The cursor is pointing to a Node within the list, containing the borrowed value.
    Node(&'a T),
}

impl<T> Clone for State<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for State<'_, T> {}

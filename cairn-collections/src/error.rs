//! Error types for the collections.
//!
//! The heap has no error path. Only the stack and the list's positional
//! insert can reject an operation.

use core::fmt;

/// Returned by [`Stack::pop`](crate::Stack::pop) when the stack is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyStack;

impl fmt::Display for EmptyStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid operation: empty stack")
    }
}

impl std::error::Error for EmptyStack {}

/// Returned by [`List::insert_at`](crate::List::insert_at) when the position
/// lies past the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    /// The rejected position.
    pub position: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} out of bounds for list of length {}",
            self.position, self.len
        )
    }
}

impl std::error::Error for OutOfBounds {}

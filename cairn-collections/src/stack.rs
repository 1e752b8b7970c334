//! LIFO stack over a `Vec<T>`.

use crate::EmptyStack;

/// A last-in, first-out stack.
///
/// # Example
///
/// ```
/// use cairn_collections::{EmptyStack, Stack};
///
/// let mut stack = Stack::new();
/// stack.push("a");
/// stack.push("b");
///
/// assert_eq!(stack.top(), Some(&"b"));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(EmptyStack));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes an item on top of the stack.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyStack`] if there is nothing to pop.
    #[inline]
    pub fn pop(&mut self) -> Result<T, EmptyStack> {
        self.items.pop().ok_or(EmptyStack)
    }

    /// Returns a reference to the top item.
    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns a copy of the top item, or `T::default()` if the stack is
    /// empty.
    #[inline]
    pub fn top_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.top().cloned().unwrap_or_default()
    }

    /// Removes all items.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

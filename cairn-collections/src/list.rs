//! Doubly-linked list with index-linked nodes.
//!
//! Nodes live in a slot vector owned by the list and link to each other by
//! slot index, with `NIL` as the "no link" sentinel. Removed slots go on a
//! free stack and are reused by later inserts, so a list that churns at a
//! steady size stops allocating.
//!
//! # Example
//!
//! ```
//! use cairn_collections::List;
//!
//! let mut list = List::new();
//! list.push_back(10);
//! list.push_back(20);
//! list.push_front(5);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Some(&5));
//! assert_eq!(list.back(), Some(&20));
//!
//! // Positional insert: 15 lands at index 2
//! list.insert_at(2, 15).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [5, 10, 15, 20]);
//!
//! // Backward traversal with indices
//! let backward: Vec<_> = list.iter().enumerate().rev().collect();
//! assert_eq!(backward[0], (3, &20));
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::OutOfBounds;

/// Sentinel for "no link".
const NIL: usize = usize::MAX;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: usize,
    next: usize,
}

/// A doubly-linked list.
///
/// Push and pop at either end are O(1). [`insert_at`](Self::insert_at) walks
/// from whichever end is closer to the target position.
#[derive(Clone)]
pub struct List<T> {
    nodes: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // =========================================================================
    // Insert
    // =========================================================================

    /// Pushes a value to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let old_head = self.head;
        let slot = self.alloc(Node {
            value,
            prev: NIL,
            next: old_head,
        });

        if old_head == NIL {
            self.tail = slot;
        } else {
            self.node_mut(old_head).prev = slot;
        }
        self.head = slot;
        self.len += 1;
    }

    /// Pushes a value to the back of the list.
    pub fn push_back(&mut self, value: T) {
        let old_tail = self.tail;
        let slot = self.alloc(Node {
            value,
            prev: old_tail,
            next: NIL,
        });

        if old_tail == NIL {
            self.head = slot;
        } else {
            self.node_mut(old_tail).next = slot;
        }
        self.tail = slot;
        self.len += 1;
    }

    /// Inserts a value so that it ends up at index `position`.
    ///
    /// Position `0` pushes to the front and position `len()` pushes to the
    /// back.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `position > len()`. The list is unchanged.
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<(), OutOfBounds> {
        if position > self.len {
            return Err(OutOfBounds {
                position,
                len: self.len,
            });
        }

        if position == 0 {
            self.push_front(value);
        } else if position == self.len {
            self.push_back(value);
        } else {
            let next = self.slot_at(position);
            let prev = self.node(next).prev;
            let slot = self.alloc(Node { value, prev, next });
            self.node_mut(prev).next = slot;
            self.node_mut(next).prev = slot;
            self.len += 1;
        }

        Ok(())
    }

    // =========================================================================
    // Remove
    // =========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.head == NIL {
            return None;
        }

        let node = self.release(self.head);
        self.head = node.next;
        if self.head == NIL {
            self.tail = NIL;
        } else {
            self.node_mut(self.head).prev = NIL;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Removes and returns the back element.
    ///
    /// Returns `None` if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.tail == NIL {
            return None;
        }

        let node = self.release(self.tail);
        self.tail = node.prev;
        if self.tail == NIL {
            self.head = NIL;
        } else {
            self.node_mut(self.tail).next = NIL;
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
        self.len = 0;
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.value(self.head)
    }

    /// Returns a mutable reference to the front element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.value_mut(self.head)
    }

    /// Returns a reference to the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.value(self.tail)
    }

    /// Returns a mutable reference to the back element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.value_mut(self.tail)
    }

    /// Returns an iterator from front to back.
    ///
    /// The iterator is double-ended, so `iter().rev()` walks back to front.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    // =========================================================================
    // Slots
    // =========================================================================

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(node);
                slot
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, slot: usize) -> Node<T> {
        let node = self.nodes[slot].take().expect("linked slot is occupied");
        self.free.push(slot);
        node
    }

    #[inline]
    fn node(&self, slot: usize) -> &Node<T> {
        self.nodes[slot].as_ref().expect("linked slot is occupied")
    }

    #[inline]
    fn node_mut(&mut self, slot: usize) -> &mut Node<T> {
        self.nodes[slot].as_mut().expect("linked slot is occupied")
    }

    #[inline]
    fn value(&self, slot: usize) -> Option<&T> {
        self.nodes.get(slot)?.as_ref().map(|node| &node.value)
    }

    #[inline]
    fn value_mut(&mut self, slot: usize) -> Option<&mut T> {
        self.nodes.get_mut(slot)?.as_mut().map(|node| &mut node.value)
    }

    /// Slot of the node at `position`. Requires `position < len`.
    fn slot_at(&self, position: usize) -> usize {
        debug_assert!(position < self.len);

        if position <= self.len / 2 {
            let mut slot = self.head;
            for _ in 0..position {
                slot = self.node(slot).next;
            }
            slot
        } else {
            let mut slot = self.tail;
            for _ in position + 1..self.len {
                slot = self.node(slot).prev;
            }
            slot
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Iterator
// =============================================================================

/// Front-to-back iterator over a [`List`].
///
/// Created by [`List::iter`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.front);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.back);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

//! Binary heap ordered by a caller-supplied predicate.
//!
//! The heap never asks `T` how to order itself. Every comparison goes through
//! the `less` predicate bound at construction, so the same element type can
//! back a min-heap, a max-heap, or a multi-field priority scheme.
//!
//! `less(a, b)` returning `true` means `a` leaves the heap before `b`.
//!
//! # Example
//!
//! ```
//! use cairn_collections::Heap;
//!
//! // Max-heap: the larger value is "less" because it pops first
//! let mut heap = Heap::new(|a: &i64, b: &i64| a > b);
//! heap.push(10);
//! heap.push(20);
//! heap.push(5);
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.pop(), Some(20));
//! assert_eq!(heap.pop(), Some(10));
//! ```
//!
//! # Empty Pops
//!
//! [`Heap::pop`] returns `None` on an empty heap. [`Heap::pop_or_default`]
//! returns `T::default()` instead and is the entry point for callers that
//! treat an empty heap as yielding a zero value:
//!
//! ```
//! use cairn_collections::Heap;
//!
//! let mut heap: Heap<u32> = Heap::min_heap();
//! assert_eq!(heap.pop(), None);
//! assert_eq!(heap.pop_or_default(), 0);
//! assert!(heap.is_empty());
//! ```

use core::fmt;

/// A binary heap over a `Vec<T>`, ordered by a stored predicate.
///
/// The backing vector is a complete binary tree in implicit layout: the
/// children of position `i` live at `2i + 1` and `2i + 2`. For every child
/// `c` of `i`, `less(elements[c], elements[i])` is false, so the root is
/// always an element that no other element beats.
///
/// The default predicate type `fn(&T, &T) -> bool` lets non-capturing
/// closures be named in type position (`Heap<u64>`). Capturing closures get
/// their own `F`.
///
/// # Example
///
/// ```
/// use cairn_collections::Heap;
///
/// #[derive(Debug, Default)]
/// struct Job {
///     priority: u32,
///     name: &'static str,
/// }
///
/// let mut jobs = Heap::new(|a: &Job, b: &Job| a.priority > b.priority);
/// jobs.push(Job { priority: 3, name: "index" });
/// jobs.push(Job { priority: 5, name: "flush" });
/// jobs.push(Job { priority: 1, name: "compact" });
///
/// let next = jobs.pop_or_default();
/// assert_eq!(next.priority, 5);
/// assert_eq!(next.name, "flush");
/// ```
#[derive(Clone)]
pub struct Heap<T, F = fn(&T, &T) -> bool> {
    elements: Vec<T>,
    less: F,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty heap that pops the smallest element first.
    pub fn min_heap() -> Self {
        Self::new(|a: &T, b: &T| a < b)
    }

    /// Creates an empty heap that pops the largest element first.
    pub fn max_heap() -> Self {
        Self::new(|a: &T, b: &T| a > b)
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::min_heap()
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `less`.
    #[inline]
    pub const fn new(less: F) -> Self {
        Self {
            elements: Vec::new(),
            less,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(less: F, capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Creates a heap holding `elements`, heapified in O(n).
    ///
    /// ```
    /// use cairn_collections::Heap;
    ///
    /// let mut heap = Heap::with_elements(|a: &i32, b: &i32| a < b, [5, 3, 8, 1]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn with_elements<I>(less: F, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(less, elements.into_iter().collect())
    }

    /// Creates a heap from an existing vector, reusing its allocation.
    pub fn from_vec(less: F, elements: Vec<T>) -> Self {
        let mut heap = Self { elements, less };
        heap.heapify();
        heap
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the capacity of the backing vector.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the element the next [`pop`](Self::pop) would remove.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    // ========================================================================
    // Insert / remove
    // ========================================================================

    /// Pushes an element onto the heap. O(log n).
    pub fn push(&mut self, value: T) {
        let pos = self.elements.len();
        self.elements.push(value);
        self.sift_up(pos);
    }

    /// Removes and returns the root element.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.elements.pop()?;
        if self.elements.is_empty() {
            return Some(last);
        }

        let root = core::mem::replace(&mut self.elements[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Removes and returns the root element, or `T::default()` if the heap
    /// is empty.
    ///
    /// Popping an empty heap leaves it empty; it never panics.
    #[inline]
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    /// Removes all elements, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    // ========================================================================
    // Ordering
    // ========================================================================

    /// Restores heap order over the whole vector, last parent first.
    fn heapify(&mut self) {
        for pos in (0..self.elements.len() / 2).rev() {
            self.sift_down(pos);
        }
    }

    #[inline]
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !(self.less)(&self.elements[pos], &self.elements[parent]) {
                break;
            }
            self.elements.swap(pos, parent);
            pos = parent;
        }
    }

    #[inline]
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.elements.len();

        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && !(self.less)(&self.elements[left], &self.elements[right])
            {
                right
            } else {
                left
            };

            if !(self.less)(&self.elements[child], &self.elements[pos]) {
                break;
            }
            self.elements.swap(pos, child);
            pos = child;
        }
    }
}

impl<T, F> Extend<T> for Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

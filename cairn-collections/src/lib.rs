//! Small generic collections: a predicate-ordered heap, a doubly-linked
//! list, a hash set, and a stack.
//!
//! The four containers are independent of each other. The heap is the one
//! with real ordering logic; the rest are thin, predictable wrappers with
//! O(1) operations.
//!
//! # Quick Start
//!
//! ```
//! use cairn_collections::Heap;
//!
//! // The predicate alone decides orientation: `a < b` pops the smallest first
//! let mut heap = Heap::with_elements(|a: &i32, b: &i32| a < b, [15, 10, 30, 5]);
//!
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.pop(), Some(10));
//! assert_eq!(heap.len(), 2);
//! ```
//!
//! # Ordering Predicates
//!
//! A [`Heap`] is ordered by a `Fn(&T, &T) -> bool` stored at construction.
//! `less(a, b) == true` means `a` leaves the heap before `b`. The element type
//! needs no `Ord` impl, and priority can combine several fields:
//!
//! ```
//! use cairn_collections::Heap;
//!
//! struct Order {
//!     price: u64,
//!     seq: u64,
//! }
//!
//! // Best bid first, then earliest arrival
//! let mut bids = Heap::new(|a: &Order, b: &Order| {
//!     a.price > b.price || (a.price == b.price && a.seq < b.seq)
//! });
//!
//! bids.push(Order { price: 100, seq: 2 });
//! bids.push(Order { price: 101, seq: 3 });
//! bids.push(Order { price: 100, seq: 1 });
//!
//! assert_eq!(bids.pop().map(|o| o.seq), Some(3));
//! assert_eq!(bids.pop().map(|o| o.seq), Some(1));
//! ```
//!
//! # Empty Containers
//!
//! | Container | Empty read | Result |
//! |-----------|------------|--------|
//! | [`Heap`] | `pop` / `pop_or_default` | `None` / `T::default()` |
//! | [`List`] | `pop_front`, `pop_back` | `None` |
//! | [`Stack`] | `pop` / `top_or_default` | `Err(EmptyStack)` / `T::default()` |
//! | [`Set`] | `remove` | `false` |
//!
//! None of these panic.
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`Heap`] | Priority queues, timers | O(log n) push/pop, O(n) bulk build |
//! | [`List`] | Deques, ordered queues | O(1) push/pop at both ends |
//! | [`Stack`] | LIFO work lists | O(1) push/pop |
//! | [`Set`] | Membership | O(1) add/remove/contains |
//!
//! # Thread Safety
//!
//! No container locks internally. They are `Send`/`Sync` whenever their
//! contents are; shared mutation needs external synchronization.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod list;
pub mod set;
pub mod stack;

pub use error::{EmptyStack, OutOfBounds};
pub use heap::Heap;
pub use list::List;
pub use set::Set;
pub use stack::Stack;

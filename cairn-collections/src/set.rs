//! Hash set.

use std::collections::HashSet;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

/// An unordered set of unique values.
///
/// Adding a value that is already present leaves the set unchanged, and
/// removing an absent value is a no-op.
///
/// # Example
///
/// ```
/// use cairn_collections::Set;
///
/// let mut set = Set::new();
/// assert!(set.add("hello"));
/// assert!(!set.add("hello"));
///
/// assert_eq!(set.len(), 1);
/// assert!(set.contains(&"hello"));
/// assert!(!set.contains(&"world"));
/// ```
#[derive(Debug, Clone)]
pub struct Set<T, S = RandomState> {
    items: HashSet<T, S>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    /// Creates an empty set with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: HashSet::with_capacity(capacity),
        }
    }
}

impl<T, S: Default> Default for Set<T, S> {
    fn default() -> Self {
        Self {
            items: HashSet::default(),
        }
    }
}

impl<T, S> Set<T, S> {
    /// Creates an empty set that hashes with `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            items: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of values in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes all values.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T, S> Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Adds a value. Returns `true` if it was not already present.
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Removes a value. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, value: &T) -> bool {
        self.items.remove(value)
    }

    /// Returns `true` if the set contains `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T, S> Extend<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, S> FromIterator<T> for Set<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let set: Set<i32> = Set::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
    }

    #[test]
    fn add() {
        let mut set = Set::new();

        assert!(set.add(1));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&1));

        assert!(set.add(2));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&2));

        assert!(!set.add(1));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&1));
    }

    #[test]
    fn remove() {
        let mut set = Set::new();

        assert!(!set.remove(&1));
        assert_eq!(set.len(), 0);

        set.add(1);
        assert!(set.remove(&1));
        assert_eq!(set.len(), 0);
        assert!(!set.contains(&1));

        set.add(2);
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&2));
    }

    #[test]
    fn contains_strings() {
        let mut set = Set::new();
        assert!(!set.contains(&"hello".to_string()));

        set.add("hello".to_string());
        assert!(set.contains(&"hello".to_string()));
        assert!(!set.contains(&"world".to_string()));

        set.remove(&"hello".to_string());
        assert!(!set.contains(&"hello".to_string()));
    }

    #[test]
    fn size_tracks_unique_values() {
        let mut set: Set<u64> = [11, 22].into_iter().collect();
        assert_eq!(set.len(), 2);

        set.add(11);
        assert_eq!(set.len(), 2);

        set.remove(&11);
        assert_eq!(set.len(), 1);

        set.extend([22, 33, 44]);
        assert_eq!(set.len(), 3);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn custom_hasher() {
        use std::hash::{BuildHasherDefault, DefaultHasher};

        let mut set: Set<&str, BuildHasherDefault<DefaultHasher>> = Set::default();
        set.add("a");
        set.add("b");
        set.add("a");
        assert_eq!(set.len(), 2);

        let mut set = Set::with_hasher(RandomState::new());
        set.add(7u8);
        assert!(set.contains(&7));
    }
}

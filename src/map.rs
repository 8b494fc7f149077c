//! BalancedMap
//!
//! The public ordered map. Every operation delegates to the tree engine and
//! relinks the returned root.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{MapError, Result};
use crate::tree::node::{height, Link};
use crate::tree::{delete, insert, search, validate};

/// In-memory ordered map backed by an AVL tree
///
/// ## Complexity
/// | Operation | Cost |
/// |-----------|------|
/// | `put` / `insert` | O(log n) |
/// | `get` / `contains_key` | O(log n) |
/// | `remove` | O(log n) |
/// | `min` / `max` | O(log n) |
/// | `len` / `height` | O(1) |
///
/// ## Concurrency
/// Single-threaded by contract. Wrap it in [`crate::sync::LockedMap`] (or
/// shard it with [`crate::sync::ShardedMap`]) for shared access.
///
/// ```
/// use avlmap::BalancedMap;
///
/// let mut map = BalancedMap::new();
/// map.put(30, "thirty");
/// map.put(20, "twenty");
/// map.put(10, "ten");
///
/// assert_eq!(map.get(&20), Some(&"twenty"));
/// assert_eq!(map.root_key(), Some(&20));
/// assert_eq!(map.height(), 2);
/// assert_eq!(map.min(), Ok(&"ten"));
/// ```
#[derive(Clone)]
pub struct BalancedMap<K, V> {
    /// Root of the tree (None when empty)
    root: Link<K, V>,

    /// Number of entries
    len: usize,
}

impl<K, V> BalancedMap<K, V> {
    /// Create a new empty map
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the whole tree (0 if empty)
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Key stored at the root, if any
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Visit every entry in ascending key order
    pub(crate) fn walk_entries<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        search::walk_in_order(&self.root, visit);
    }
}

impl<K: Ord, V> BalancedMap<K, V> {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert or overwrite a binding
    ///
    /// Overwriting keeps the existing node, so the tree shape is unchanged.
    pub fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    /// Insert or overwrite a binding, returning the previous value
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let inserted = insert::insert(self.root.take(), key, value);
        self.root = Some(inserted.root);

        if inserted.replaced.is_none() {
            self.len += 1;
        }
        inserted.replaced
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Get the value bound to `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::find(&self.root, key).map(|node| &node.value)
    }

    /// Get a mutable reference to the value bound to `key`
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::find_mut(&mut self.root, key).map(|node| &mut node.value)
    }

    /// Check if `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::find(&self.root, key).is_some()
    }

    /// Height of the subtree rooted at `key`'s node, or -1 if absent
    pub fn height_of<Q>(&self, key: &Q) -> i64
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        search::find(&self.root, key).map_or(-1, |node| i64::from(node.height))
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove `key`; returns true if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Remove `key` and return its value
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove `key` and return the stored key/value pair
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed) = delete::delete(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Remove and return the entry with the smallest key
    pub fn pop_min(&mut self) -> Result<(K, V)> {
        let root = self.root.take().ok_or_else(|| MapError::empty("pop_min"))?;
        let (root, entry) = delete::take_min(root);
        self.root = root;
        self.len -= 1;
        Ok(entry)
    }

    /// Remove and return the entry with the largest key
    pub fn pop_max(&mut self) -> Result<(K, V)> {
        let root = self.root.take().ok_or_else(|| MapError::empty("pop_max"))?;
        let (root, entry) = delete::take_max(root);
        self.root = root;
        self.len -= 1;
        Ok(entry)
    }

    // =========================================================================
    // Extremes
    // =========================================================================

    /// Value at the smallest key
    ///
    /// Fails with [`MapError::EmptyMap`] if the map is empty.
    pub fn min(&self) -> Result<&V> {
        search::leftmost(&self.root)
            .map(|node| &node.value)
            .ok_or_else(|| MapError::empty("min"))
    }

    /// Value at the largest key
    ///
    /// Fails with [`MapError::EmptyMap`] if the map is empty.
    pub fn max(&self) -> Result<&V> {
        search::rightmost(&self.root)
            .map(|node| &node.value)
            .ok_or_else(|| MapError::empty("max"))
    }

    /// Smallest key and its value
    pub fn min_entry(&self) -> Result<(&K, &V)> {
        self.first_entry().ok_or_else(|| MapError::empty("min_entry"))
    }

    /// Largest key and its value
    pub fn max_entry(&self) -> Result<(&K, &V)> {
        self.last_entry().ok_or_else(|| MapError::empty("max_entry"))
    }

    /// Smallest entry, `None` when empty (no empty-map event is logged)
    pub(crate) fn first_entry(&self) -> Option<(&K, &V)> {
        search::leftmost(&self.root).map(|node| (&node.key, &node.value))
    }

    /// Largest entry, `None` when empty (no empty-map event is logged)
    pub(crate) fn last_entry(&self) -> Option<(&K, &V)> {
        search::rightmost(&self.root).map(|node| (&node.key, &node.value))
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Verify order, balance, height bookkeeping and the entry count
    pub fn validate(&self) -> Result<()> {
        let checked = validate::check(&self.root, None, None)?;
        if checked.count != self.len {
            return Err(MapError::InvariantViolation(format!(
                "map records {} entries but the tree holds {}",
                self.len, checked.count
            )));
        }
        Ok(())
    }
}

impl<K, V> Default for BalancedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BalancedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BalancedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BalancedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        self.walk_entries(|key, value| {
            entries.entry(key, value);
        });
        entries.finish()
    }
}

/// Two maps are equal when they hold the same entries, whatever their shape
impl<K: PartialEq, V: PartialEq> PartialEq for BalancedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }

        let mut lhs = Vec::with_capacity(self.len);
        self.walk_entries(|key, value| lhs.push((key, value)));

        let mut rhs = Vec::with_capacity(other.len);
        other.walk_entries(|key, value| rhs.push((key, value)));

        lhs == rhs
    }
}

impl<K: Eq, V: Eq> Eq for BalancedMap<K, V> {}

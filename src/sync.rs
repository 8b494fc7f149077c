//! Sync Module
//!
//! Locking wrappers that make a `BalancedMap` shareable across threads.
//!
//! ## Concurrency Model
//! The core map has no internal synchronisation. Sharing is imposed from the
//! outside in one of two ways:
//!
//! - `LockedMap`: one RwLock around one tree. Readers run concurrently,
//!   writers are serialised. `min`/`max` see a consistent whole-map view.
//! - `ShardedMap`: N independent `LockedMap`s, a key's shard picked by hash.
//!   Writers to different shards do not contend; cross-shard queries
//!   (`len`, `min`, `max`) lock shards one at a time and are not atomic
//!   with respect to concurrent writers.
//!
//! Lookups return clones so no lock guard escapes a call. Use
//! `LockedMap::read`/`write` to borrow the map for compound operations
//! under a single lock acquisition.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use parking_lot::RwLock;
use rustc_hash::FxHasher;

use crate::config::Config;
use crate::error::{MapError, Result};
use crate::map::BalancedMap;

// =============================================================================
// LockedMap
// =============================================================================

/// A `BalancedMap` behind a single RwLock
pub struct LockedMap<K, V> {
    /// The wrapped tree
    inner: RwLock<BalancedMap<K, V>>,

    /// Run invariant checks after every write
    validate_on_write: bool,
}

impl<K, V> LockedMap<K, V> {
    /// Create an empty locked map with default configuration
    pub fn new() -> Self {
        Self::from_map(BalancedMap::new(), &Config::default())
    }

    /// Create an empty locked map
    pub fn with_config(config: &Config) -> Self {
        Self::from_map(BalancedMap::new(), config)
    }

    /// Wrap an existing map
    pub fn from_map(map: BalancedMap<K, V>, config: &Config) -> Self {
        Self {
            inner: RwLock::new(map),
            validate_on_write: config.validate_on_write,
        }
    }

    /// Unwrap into the underlying map
    pub fn into_inner(self) -> BalancedMap<K, V> {
        self.inner.into_inner()
    }

    /// Run `f` with shared access to the map
    pub fn read<R>(&self, f: impl FnOnce(&BalancedMap<K, V>) -> R) -> R {
        let map = self.inner.read();
        f(&map)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Height of the whole tree (0 if empty)
    pub fn height(&self) -> u32 {
        self.inner.read().height()
    }
}

impl<K: Ord, V> LockedMap<K, V> {
    /// Run `f` with exclusive access to the map
    ///
    /// With `validate_on_write` set, the map is checked before the lock is
    /// released and any violation is logged.
    pub fn write<R>(&self, f: impl FnOnce(&mut BalancedMap<K, V>) -> R) -> R {
        let mut map = self.inner.write();
        let result = f(&mut map);

        if self.validate_on_write {
            if let Err(e) = map.validate() {
                tracing::warn!(error = %e, "invariant check failed after write");
            }
        }
        result
    }

    /// Insert or overwrite a binding
    pub fn put(&self, key: K, value: V) {
        self.write(|map| map.put(key, value));
    }

    /// Insert or overwrite a binding, returning the previous value
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.write(|map| map.insert(key, value))
    }

    /// Remove `key`; returns true if it was present
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.write(|map| map.remove(key))
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.write(|map| map.clear());
    }

    /// Check if `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read().contains_key(key)
    }

    /// Clone of the value bound to `key`
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.inner.read().get(key).cloned()
    }

    /// Height of the subtree rooted at `key`, or -1 if absent
    pub fn height_of<Q>(&self, key: &Q) -> i64
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.read().height_of(key)
    }

    /// Clone of the value at the smallest key
    pub fn min(&self) -> Result<V>
    where
        V: Clone,
    {
        self.inner.read().min().cloned()
    }

    /// Clone of the value at the largest key
    pub fn max(&self) -> Result<V>
    where
        V: Clone,
    {
        self.inner.read().max().cloned()
    }
}

impl<K, V> Default for LockedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ShardedMap
// =============================================================================

/// Independent `LockedMap`s selected by key hash
pub struct ShardedMap<K, V> {
    shards: Vec<LockedMap<K, V>>,
}

impl<K: Ord + Hash, V> ShardedMap<K, V> {
    /// Create an empty sharded map with `config.shard_count` shards
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let shards = (0..config.shard_count)
            .map(|_| LockedMap::with_config(&config))
            .collect();

        tracing::debug!(shard_count = config.shard_count, "sharded map created");
        Ok(Self { shards })
    }

    /// Number of shards
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Shard responsible for `key`
    fn shard<Q>(&self, key: &Q) -> &LockedMap<K, V>
    where
        K: Borrow<Q>,
        Q: Hash + ?Sized,
    {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        let index = (hasher.finish() % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Insert or overwrite a binding
    pub fn put(&self, key: K, value: V) {
        self.shard(&key).put(key, value);
    }

    /// Insert or overwrite a binding, returning the previous value
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.shard(&key).insert(key, value)
    }

    /// Clone of the value bound to `key`
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
        V: Clone,
    {
        self.shard(key).get(key)
    }

    /// Check if `key` is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.shard(key).contains_key(key)
    }

    /// Remove `key`; returns true if it was present
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.shard(key).remove(key)
    }

    /// Total entries across all shards
    pub fn len(&self) -> usize {
        self.shards.iter().map(LockedMap::len).sum()
    }

    /// Check if every shard is empty
    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(LockedMap::is_empty)
    }

    /// Remove every entry from every shard
    pub fn clear(&self) {
        for shard in &self.shards {
            shard.clear();
        }
    }

    /// Clone of the value at the smallest key across all shards
    pub fn min(&self) -> Result<V>
    where
        K: Clone,
        V: Clone,
    {
        self.shards
            .iter()
            .filter_map(|shard| {
                // Empty shards are normal here, so skip `min_entry` and its
                // empty-map debug event
                shard.read(|map| {
                    map.first_entry().map(|(key, value)| (key.clone(), value.clone()))
                })
            })
            .min_by(|a, b| a.0.cmp(&b.0))
            .map(|(_, value)| value)
            .ok_or_else(|| MapError::empty("min"))
    }

    /// Clone of the value at the largest key across all shards
    pub fn max(&self) -> Result<V>
    where
        K: Clone,
        V: Clone,
    {
        self.shards
            .iter()
            .filter_map(|shard| {
                // Empty shards are normal here, so skip `max_entry` and its
                // empty-map debug event
                shard.read(|map| {
                    map.last_entry().map(|(key, value)| (key.clone(), value.clone()))
                })
            })
            .max_by(|a, b| a.0.cmp(&b.0))
            .map(|(_, value)| value)
            .ok_or_else(|| MapError::empty("max"))
    }
}

//! Serde support (feature `serde`)
//!
//! A `BalancedMap` serializes as a plain map in ascending key order and is
//! rebuilt by re-inserting each entry, so the tree shape after a round trip
//! may differ from the original. The encoded form carries no tree metadata
//! and is not a stable storage format.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::BalancedMap;

impl<K: Serialize, V: Serialize> Serialize for BalancedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        let mut outcome = Ok(());
        self.walk_entries(|key, value| {
            if outcome.is_ok() {
                outcome = map.serialize_entry(key, value);
            }
        });
        outcome?;

        map.end()
    }
}

struct BalancedMapVisitor<K, V> {
    marker: PhantomData<fn() -> BalancedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for BalancedMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = BalancedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = BalancedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for BalancedMap<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BalancedMapVisitor {
            marker: PhantomData,
        })
    }
}

//! Bincode round-trip tests
//!
//! Tests verify:
//! - Contents survive encode/decode
//! - Decoded trees are valid AVL trees
//! - Entries are written in ascending key order

use std::collections::BTreeMap;

use avlmap::BalancedMap;

use crate::common::map_from_keys;

#[test]
fn test_roundtrip_preserves_entries() {
    let map = map_from_keys(&[40, 10, 70, 20, 60, 30, 50]);

    let bytes = bincode::serialize(&map).unwrap();
    let decoded: BalancedMap<i32, i32> = bincode::deserialize(&bytes).unwrap();

    assert_eq!(decoded, map);
    assert_eq!(decoded.len(), 7);
    decoded.validate().unwrap();
}

#[test]
fn test_roundtrip_empty_map() {
    let map: BalancedMap<String, u64> = BalancedMap::new();

    let bytes = bincode::serialize(&map).unwrap();
    let decoded: BalancedMap<String, u64> = bincode::deserialize(&bytes).unwrap();

    assert!(decoded.is_empty());
}

#[test]
fn test_encoding_matches_sorted_map() {
    // Same wire shape as a BTreeMap with the same entries
    let map: BalancedMap<String, Vec<u8>> = vec![
        ("zeta".to_string(), vec![3]),
        ("alpha".to_string(), vec![1]),
        ("mu".to_string(), vec![2, 2]),
    ]
    .into_iter()
    .collect();

    let model: BTreeMap<String, Vec<u8>> = vec![
        ("alpha".to_string(), vec![1]),
        ("mu".to_string(), vec![2, 2]),
        ("zeta".to_string(), vec![3]),
    ]
    .into_iter()
    .collect();

    assert_eq!(bincode::serialize(&map).unwrap(), bincode::serialize(&model).unwrap());

    let from_model: BalancedMap<String, Vec<u8>> =
        bincode::deserialize(&bincode::serialize(&model).unwrap()).unwrap();
    assert_eq!(from_model, map);
}

#[test]
fn test_roundtrip_large_map_stays_balanced() {
    let map: BalancedMap<u32, u32> = (0..5000).map(|i| (i, i ^ 0x5a5a)).collect();

    let bytes = bincode::serialize(&map).unwrap();
    let decoded: BalancedMap<u32, u32> = bincode::deserialize(&bytes).unwrap();

    decoded.validate().unwrap();
    assert_eq!(decoded.len(), 5000);
    assert_eq!(decoded.get(&4321), Some(&(4321 ^ 0x5a5a)));
}

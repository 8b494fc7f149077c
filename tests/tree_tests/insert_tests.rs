//! Insertion Tests
//!
//! Tests verify:
//! - Each of the four rotation cases triggered by insertion
//! - Duplicate keys overwrite in place
//! - Balance holds for sorted and adversarial insert orders

use avlmap::BalancedMap;

use crate::common::{init_tracing, map_from_keys, max_height, min_height};

// =============================================================================
// Rotation Cases
// =============================================================================

#[test]
fn test_single_insert_is_leaf() {
    init_tracing();
    let map = map_from_keys(&[42]);

    assert_eq!(map.root_key(), Some(&42));
    assert_eq!(map.height(), 1);
    assert_eq!(map.height_of(&42), 1);
}

#[test]
fn test_left_left_triggers_right_rotation() {
    init_tracing();
    let map = map_from_keys(&[30, 20, 10]);

    assert_eq!(map.root_key(), Some(&20));
    assert_eq!(map.height(), 2);
    assert_eq!(map.height_of(&10), 1);
    assert_eq!(map.height_of(&30), 1);
}

#[test]
fn test_right_right_triggers_left_rotation() {
    let map = map_from_keys(&[10, 20, 30]);

    assert_eq!(map.root_key(), Some(&20));
    assert_eq!(map.height(), 2);
}

#[test]
fn test_right_left_zig_zag_triggers_double_rotation() {
    let map = map_from_keys(&[10, 30, 20]);

    assert_eq!(map.root_key(), Some(&20));
    assert_eq!(map.height(), 2);
    assert_eq!(map.height_of(&10), 1);
    assert_eq!(map.height_of(&30), 1);
}

#[test]
fn test_left_right_zig_zag_triggers_double_rotation() {
    let map = map_from_keys(&[30, 10, 20]);

    assert_eq!(map.root_key(), Some(&20));
    assert_eq!(map.height(), 2);
}

#[test]
fn test_rotation_below_root() {
    // 20 stays root; 10 -> 5 -> 1 chain is fixed under it
    let map = map_from_keys(&[20, 10, 30, 5, 1]);

    assert_eq!(map.root_key(), Some(&20));
    assert_eq!(map.height_of(&5), 2);
    assert_eq!(map.height_of(&1), 1);
    assert_eq!(map.height_of(&10), 1);
    assert_eq!(map.height(), 3);
}

#[test]
fn test_inner_insert_with_grandchildren() {
    // {10,20,30,40,50} then 25 lands right-left of root 20
    let map = map_from_keys(&[10, 20, 30, 40, 50, 25]);

    assert_eq!(map.root_key(), Some(&30));
    assert_eq!(map.height(), 3);
    assert_eq!(map.height_of(&20), 2);
    assert_eq!(map.height_of(&40), 2);
    assert_eq!(map.height_of(&25), 1);
}

// =============================================================================
// Ascending / Descending Inputs
// =============================================================================

#[test]
fn test_ascending_one_to_seven_is_perfect() {
    init_tracing();
    let map = map_from_keys(&[1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(map.height(), 3);
    assert_eq!(map.root_key(), Some(&4));
    assert_eq!(map.height_of(&2), 2);
    assert_eq!(map.height_of(&6), 2);
    for leaf in [1, 3, 5, 7] {
        assert_eq!(map.height_of(&leaf), 1);
    }
}

#[test]
fn test_descending_one_to_seven_is_perfect() {
    let map = map_from_keys(&[7, 6, 5, 4, 3, 2, 1]);

    assert_eq!(map.height(), 3);
    assert_eq!(map.root_key(), Some(&4));
}

#[test]
fn test_sorted_input_stays_logarithmic() {
    let mut map = BalancedMap::new();
    for key in 0..1023 {
        map.put(key, ());
    }

    map.validate().unwrap();
    assert_eq!(map.len(), 1023);
    // 2^10 - 1 ascending keys build a perfect tree
    assert_eq!(map.height(), 10);
}

#[test]
fn test_alternating_input_within_avl_bounds() {
    let mut map = BalancedMap::new();
    let mut keys = Vec::new();
    for i in 0..500 {
        keys.push(i);
        keys.push(1000 - i);
    }
    for &key in &keys {
        map.put(key, key);
    }

    map.validate().unwrap();
    assert!(map.height() >= min_height(map.len()));
    assert!(map.height() <= max_height(map.len()));
}

// =============================================================================
// Duplicate Keys
// =============================================================================

#[test]
fn test_duplicate_key_overwrites_value() {
    let mut map = BalancedMap::new();
    map.put(1, "one");
    map.put(1, "uno");

    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&"uno"));
}

#[test]
fn test_duplicate_key_keeps_shape() {
    let mut map = map_from_keys(&[1, 2, 3, 4, 5, 6, 7]);
    let heights: Vec<i64> = (1..=7).map(|k| map.height_of(&k)).collect();

    for key in 1..=7 {
        map.put(key, -key);
    }

    let after: Vec<i64> = (1..=7).map(|k| map.height_of(&k)).collect();
    assert_eq!(heights, after);
    assert_eq!(map.root_key(), Some(&4));
    assert_eq!(map.len(), 7);
    assert_eq!(map.get(&3), Some(&-3));
}

#[test]
fn test_insert_returns_previous_value() {
    let mut map = BalancedMap::new();

    assert_eq!(map.insert("k", 1), None);
    assert_eq!(map.insert("k", 2), Some(1));
    assert_eq!(map.get("k"), Some(&2));
    assert_eq!(map.len(), 1);
}

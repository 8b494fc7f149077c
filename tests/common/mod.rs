//! Shared test helpers

#![allow(dead_code)]

use std::sync::Once;

use avlmap::BalancedMap;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a tracing subscriber once per test binary
///
/// Honors `RUST_LOG`; defaults to warnings only.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// Build a map by putting `keys` in order, each bound to `key * 10`
pub fn map_from_keys(keys: &[i32]) -> BalancedMap<i32, i32> {
    let mut map = BalancedMap::new();
    for &key in keys {
        map.put(key, key * 10);
        map.validate().unwrap();
    }
    map
}

/// Smallest height an AVL tree of `n` nodes can have
pub fn min_height(n: usize) -> u32 {
    let mut height = 0;
    while (1usize << height) - 1 < n {
        height += 1;
    }
    height
}

/// Largest height an AVL tree of `n` nodes can have (Fibonacci bound)
pub fn max_height(n: usize) -> u32 {
    // Minimum node count for heights 0, 1, 2, ...: N(h) = N(h-1) + N(h-2) + 1
    let (mut prev, mut curr, mut height) = (0usize, 1usize, 1u32);
    if n == 0 {
        return 0;
    }
    while prev + curr + 1 <= n {
        let next = prev + curr + 1;
        prev = curr;
        curr = next;
        height += 1;
    }
    height
}

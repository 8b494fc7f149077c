//! # avlmap
//!
//! An in-memory ordered key-value map backed by an AVL tree:
//! - Logarithmic insert, lookup, delete and min/max
//! - Cached subtree heights, rebalancing by rotation on every mutation
//! - Single-threaded core, with optional external locking layers
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              LockedMap / ShardedMap  (sync)                  │
//! │         RwLock per tree, shard chosen by key hash            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ optional
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  BalancedMap  (map)                          │
//! │     put / get / contains_key / remove / min / max / height   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────┬──────────────┐
//!          ▼            ▼             ▼              ▼
//!   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌─────────────┐
//!   │  insert   │ │  delete   │ │  search   │ │  validate   │
//!   └─────┬─────┘ └─────┬─────┘ └───────────┘ └─────────────┘
//!         └──────┬──────┘
//!                ▼
//!         ┌─────────────┐
//!         │   rotate    │
//!         │   + node    │
//!         └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

mod tree;
pub mod map;
pub mod sync;

#[cfg(feature = "serde")]
mod serde_impl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MapError, Result};
pub use config::Config;
pub use map::BalancedMap;
pub use sync::{LockedMap, ShardedMap};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of avlmap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

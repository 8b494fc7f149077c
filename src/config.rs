//! Configuration for the locking layer
//!
//! The core `BalancedMap` has nothing to configure; these knobs only shape
//! how `LockedMap` and `ShardedMap` wrap it.

use crate::error::{MapError, Result};

/// Configuration for the external locking wrappers
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Sharding Configuration
    // -------------------------------------------------------------------------
    /// Number of independent trees in a `ShardedMap` (must be >= 1)
    pub shard_count: usize,

    // -------------------------------------------------------------------------
    // Debug Configuration
    // -------------------------------------------------------------------------
    /// Run `BalancedMap::validate` after every mutation and log violations
    pub validate_on_write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shard_count: 16,
            validate_on_write: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.shard_count == 0 {
            return Err(MapError::Config(
                "shard_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of shards
    pub fn shard_count(mut self, count: usize) -> Self {
        self.config.shard_count = count;
        self
    }

    /// Enable or disable post-write invariant checks
    pub fn validate_on_write(mut self, enabled: bool) -> Self {
        self.config.validate_on_write = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

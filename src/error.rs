//! Error types for avlmap
//!
//! Provides a unified error type for all fallible operations.
//!
//! A missing key is not an error: lookups return `Option`, `remove` returns
//! `bool`, `height_of` returns `-1`. Errors are reserved for precondition
//! violations and for structural corruption detected by `validate`.

use thiserror::Error;

/// Result type alias using MapError
pub type Result<T> = std::result::Result<T, MapError>;

/// Unified error type for avlmap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    // -------------------------------------------------------------------------
    // Precondition Errors
    // -------------------------------------------------------------------------
    /// An extreme-value query on a map with no entries
    #[error("{operation} called on an empty map")]
    EmptyMap { operation: &'static str },

    // -------------------------------------------------------------------------
    // Structural Errors
    // -------------------------------------------------------------------------
    #[error("Tree invariant violated: {0}")]
    InvariantViolation(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MapError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        tracing::debug!(operation, "extreme-value query on empty map");
        MapError::EmptyMap { operation }
    }
}

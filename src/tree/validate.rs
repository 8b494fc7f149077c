//! Structural invariant checks
//!
//! Walks the whole tree and reports the first violation of key order,
//! cached height, or AVL balance. O(n).

use crate::error::{MapError, Result};

use super::node::Link;

/// Summary of a checked subtree
pub(crate) struct Checked {
    pub(crate) height: u32,
    pub(crate) count: usize,
}

/// Check every invariant for the subtree at `link`
///
/// All keys must lie strictly between `lower` and `upper` when given.
pub(crate) fn check<K: Ord, V>(
    link: &Link<K, V>,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<Checked> {
    let Some(node) = link else {
        return Ok(Checked {
            height: 0,
            count: 0,
        });
    };

    if lower.is_some_and(|bound| node.key <= *bound) {
        return Err(MapError::InvariantViolation(
            "key is not greater than every key of its left-side ancestors".to_string(),
        ));
    }
    if upper.is_some_and(|bound| node.key >= *bound) {
        return Err(MapError::InvariantViolation(
            "key is not less than every key of its right-side ancestors".to_string(),
        ));
    }

    let left = check(&node.left, lower, Some(&node.key))?;
    let right = check(&node.right, Some(&node.key), upper)?;

    let expected = 1 + left.height.max(right.height);
    if node.height != expected {
        return Err(MapError::InvariantViolation(format!(
            "cached height {} but children imply {}",
            node.height, expected
        )));
    }

    if left.height.abs_diff(right.height) > 1 {
        return Err(MapError::InvariantViolation(format!(
            "unbalanced node: left height {}, right height {}",
            left.height, right.height
        )));
    }

    Ok(Checked {
        height: expected,
        count: left.count + right.count + 1,
    })
}

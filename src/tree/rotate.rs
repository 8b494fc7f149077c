//! Rotation primitives
//!
//! All four rotations are O(1) local restructurings. They only reparent
//! subtrees that are already correctly ordered, so the in-order key sequence
//! of the rotated subtree is unchanged. Heights are recomputed bottom-up:
//! the demoted node first, then the promoted one.
//!
//! ```text
//!   rotate_left(x)                 rotate_right(y)
//!
//!     x                 y              y               x
//!    / \               / \            / \             / \
//!   a   y     =>      x   c          x   c    =>     a   y
//!      / \           / \            / \                 / \
//!     b   c         a   b          a   b               b   c
//! ```

use super::node::Node;

/// Promote the right child; the old root adopts the child's left subtree
///
/// # Panics
/// If `node` has no right child. Callers only rotate a node whose right
/// side is at least two levels taller than its left, so the child exists.
pub(crate) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.right.take() else {
        unreachable!("rotate_left on a node without a right child");
    };

    tracing::trace!("rotate left");

    node.right = pivot.left.take();
    node.update_height();

    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Promote the left child; the old root adopts the child's right subtree
///
/// # Panics
/// If `node` has no left child. Callers only rotate a node whose left
/// side is at least two levels taller than its right, so the child exists.
pub(crate) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    let Some(mut pivot) = node.left.take() else {
        unreachable!("rotate_right on a node without a left child");
    };

    tracing::trace!("rotate right");

    node.left = pivot.right.take();
    node.update_height();

    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Left subtree is right-heavy: rotate the left child left, then the node right
pub(crate) fn rotate_left_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if let Some(left) = node.left.take() {
        node.left = Some(rotate_left(left));
    }
    rotate_right(node)
}

/// Right subtree is left-heavy: rotate the right child right, then the node left
pub(crate) fn rotate_right_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if let Some(right) = node.right.take() {
        node.right = Some(rotate_right(right));
    }
    rotate_left(node)
}

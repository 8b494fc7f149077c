//! Recursive insertion
//!
//! Inserting grows any subtree on the path by at most one level, so a single
//! (possibly double) rotation at the lowest unbalanced ancestor restores the
//! balance of the whole path. Which rotation is needed depends on which side
//! of the heavy child the new key landed on; each level reports that side to
//! its parent through [`Inserted::side`].

use std::cmp::Ordering;
use std::mem;

use super::node::{Link, Node};
use super::rotate::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};

/// Result of inserting into a subtree
pub(crate) struct Inserted<K, V> {
    /// The (possibly new) subtree root, to be relinked by the caller
    pub(crate) root: Box<Node<K, V>>,

    /// Previous value when the key was already present
    pub(crate) replaced: Option<V>,

    /// How the inserted key compared with this subtree's root key before any
    /// rotation at this level (`Equal` for a new leaf or an overwrite)
    side: Ordering,
}

/// Insert `key`/`value` into the subtree at `link`
///
/// An existing key keeps its node; only the value is replaced, so the
/// shape and heights stay untouched.
pub(crate) fn insert<K: Ord, V>(link: Link<K, V>, key: K, value: V) -> Inserted<K, V> {
    let Some(mut node) = link else {
        return Inserted {
            root: Node::leaf(key, value),
            replaced: None,
            side: Ordering::Equal,
        };
    };

    let side = key.cmp(&node.key);
    let replaced = match side {
        Ordering::Equal => Some(mem::replace(&mut node.value, value)),

        Ordering::Greater => {
            let child = insert(node.right.take(), key, value);
            node.right = Some(child.root);

            if node.balance_factor() == 2 {
                node = match child.side {
                    // right-right
                    Ordering::Greater => rotate_left(node),
                    // right-left
                    Ordering::Less => rotate_right_left(node),
                    Ordering::Equal => {
                        debug_assert!(false, "a fresh leaf cannot unbalance its parent");
                        node
                    }
                };
            }
            child.replaced
        }

        Ordering::Less => {
            let child = insert(node.left.take(), key, value);
            node.left = Some(child.root);

            if node.balance_factor() == -2 {
                node = match child.side {
                    // left-left
                    Ordering::Less => rotate_right(node),
                    // left-right
                    Ordering::Greater => rotate_left_right(node),
                    Ordering::Equal => {
                        debug_assert!(false, "a fresh leaf cannot unbalance its parent");
                        node
                    }
                };
            }
            child.replaced
        }
    };

    node.update_height();
    Inserted {
        root: node,
        replaced,
        side,
    }
}

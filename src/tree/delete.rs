//! Recursive deletion
//!
//! Unlike insertion, a deletion can shorten the path by one level at every
//! ancestor, and one rotation does not always restore balance globally. Every
//! level therefore rebalances and returns its current root, and every caller
//! relinks that root, all the way back up to the map's root.
//!
//! Rotation choice after a deletion compares the heights of the heavy
//! child's subtrees, since the removed key says nothing about the shape that
//! is left.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use super::node::{height, Link, Node};
use super::rotate::{rotate_left, rotate_left_right, rotate_right, rotate_right_left};

/// Remove `key` from the subtree at `link`
///
/// Returns the new subtree root (`None` once the subtree is empty) and the
/// removed key/value pair, if the key was present.
pub(crate) fn delete<K, V, Q>(link: Link<K, V>, key: &Q) -> (Link<K, V>, Option<(K, V)>)
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), key);
            node.left = left;
            removed
        }

        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), key);
            node.right = right;
            removed
        }

        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                // Take the donor from the strictly taller side, else the right
                let (donor_key, donor_value) = if left.height > right.height {
                    tracing::trace!("two-child removal: predecessor donor");
                    let (rest, donor) = take_max(left);
                    node.left = rest;
                    node.right = Some(right);
                    donor
                } else {
                    tracing::trace!("two-child removal: successor donor");
                    let (rest, donor) = take_min(right);
                    node.left = Some(left);
                    node.right = rest;
                    donor
                };

                let key = mem::replace(&mut node.key, donor_key);
                let value = mem::replace(&mut node.value, donor_value);
                Some((key, value))
            }

            (only, None) | (None, only) => {
                let Node { key, value, .. } = *node;
                return (only, Some((key, value)));
            }
        },
    };

    (Some(rebalance(node)), removed)
}

/// Detach the smallest entry of a subtree, rebalancing on the way back up
pub(crate) fn take_min<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match node.left.take() {
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), min)
        }
        None => {
            let Node {
                key, value, right, ..
            } = *node;
            (right, (key, value))
        }
    }
}

/// Detach the largest entry of a subtree, rebalancing on the way back up
pub(crate) fn take_max<K, V>(mut node: Box<Node<K, V>>) -> (Link<K, V>, (K, V)) {
    match node.right.take() {
        Some(right) => {
            let (rest, max) = take_max(right);
            node.right = rest;
            (Some(rebalance(node)), max)
        }
        None => {
            let Node {
                key, value, left, ..
            } = *node;
            (left, (key, value))
        }
    }
}

/// Restore the balance invariant at `node` after one of its subtrees shrank
///
/// Children must already be balanced with correct cached heights.
fn rebalance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    match node.balance_factor() {
        -2 => {
            let inner_heavy = node
                .left
                .as_ref()
                .is_some_and(|left| height(&left.right) > height(&left.left));
            if inner_heavy {
                rotate_left_right(node)
            } else {
                rotate_right(node)
            }
        }
        2 => {
            let inner_heavy = node
                .right
                .as_ref()
                .is_some_and(|right| height(&right.left) > height(&right.right));
            if inner_heavy {
                rotate_right_left(node)
            } else {
                rotate_left(node)
            }
        }
        _ => {
            node.update_height();
            node
        }
    }
}

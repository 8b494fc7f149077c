//! Iterative lookups and in-order walking

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::node::{Link, Node};

/// Find the node holding `key`
pub(crate) fn find<'a, K, V, Q>(link: &'a Link<K, V>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut cursor = link.as_deref();
    while let Some(node) = cursor {
        cursor = match key.cmp(node.key.borrow()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
        };
    }
    None
}

/// Find the node holding `key`, mutably
pub(crate) fn find_mut<'a, K, V, Q>(
    link: &'a mut Link<K, V>,
    key: &Q,
) -> Option<&'a mut Node<K, V>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut cursor = link.as_deref_mut();
    while let Some(node) = cursor {
        match key.cmp(node.key.borrow()) {
            Ordering::Equal => return Some(node),
            Ordering::Less => cursor = node.left.as_deref_mut(),
            Ordering::Greater => cursor = node.right.as_deref_mut(),
        }
    }
    None
}

/// Node with the smallest key
pub(crate) fn leftmost<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node)
}

/// Node with the largest key
pub(crate) fn rightmost<K, V>(link: &Link<K, V>) -> Option<&Node<K, V>> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(node)
}

/// Visit every entry in ascending key order
///
/// Uses an explicit stack bounded by the tree height.
pub(crate) fn walk_in_order<'a, K, V, F>(link: &'a Link<K, V>, mut visit: F)
where
    F: FnMut(&'a K, &'a V),
{
    let mut stack: Vec<&'a Node<K, V>> = Vec::new();
    let mut cursor = link.as_deref();

    loop {
        while let Some(node) = cursor {
            stack.push(node);
            cursor = node.left.as_deref();
        }
        match stack.pop() {
            Some(node) => {
                visit(&node.key, &node.value);
                cursor = node.right.as_deref();
            }
            None => break,
        }
    }
}

//! Tree node and height bookkeeping
//!
//! Each node caches the height of the subtree rooted at it so that balance
//! decisions are O(1) per node. An absent subtree has height 0, a leaf 1.

/// Owning link to a subtree (absent = empty subtree)
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// One key/value binding plus its subtree metadata
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    /// Height of the subtree rooted here (leaf = 1)
    pub(crate) height: u32,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Allocate a new leaf
    pub(crate) fn leaf(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Recompute the cached height from the children
    ///
    /// Children's heights must already be correct.
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(right) - height(left)`; outside `-1..=1` means unbalanced
    pub(crate) fn balance_factor(&self) -> i64 {
        i64::from(height(&self.right)) - i64::from(height(&self.left))
    }
}

/// Height of a possibly-absent subtree
#[inline]
pub(crate) fn height<K, V>(link: &Link<K, V>) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

//! Tree Module
//!
//! The AVL engine behind `BalancedMap`.
//!
//! ## Responsibilities
//! - Node layout and cached subtree heights
//! - Rotations that restore the balance invariant
//! - Recursive insert/delete returning the new subtree root
//! - Iterative lookups and min/max descent
//! - Invariant checking for tests and debugging
//!
//! ## Ownership
//! Each parent exclusively owns its children through `Option<Box<Node>>`.
//! Mutating routines take a subtree by value and hand back its (possibly
//! rotated) root; the caller relinks it. There are no parent pointers.
//!
//! ## Invariants
//! ```text
//! order:   every key in left  <  node.key  <  every key in right
//! balance: |height(left) - height(right)| <= 1
//! height:  node.height == 1 + max(height(left), height(right))
//! ```

pub(crate) mod delete;
pub(crate) mod insert;
pub(crate) mod node;
pub(crate) mod rotate;
pub(crate) mod search;
pub(crate) mod validate;

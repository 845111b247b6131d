// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only structural diagnostics: per-node layout info, invariant checks, and a text dump.
//!
//! These are meant for overlays, debug panels and tests. Nothing here mutates the tree; heights
//! and balance factors are read from the nodes the tree already maintains.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::node::{Link, height};
use crate::tree::AvlTree;
use crate::types::lt;

/// Layout and balance information for one node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo<K> {
    /// Key stored at the node.
    pub key: K,
    /// Height of the subtree rooted at the node (a leaf is 1).
    pub height: u32,
    /// `height(left) - height(right)`; always within `-1..=1` for a valid tree.
    pub balance: i32,
    /// Distance from the root (the root is 0).
    pub depth: usize,
    /// Position in ascending key order; suitable as a horizontal layout coordinate.
    pub order: usize,
}

/// A broken structural invariant reported by [`AvlTree::check_invariants`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation<K: Debug> {
    /// A key is not strictly between the bounds imposed by its ancestors.
    #[error("key {key:?} violates search-tree ordering")]
    OutOfOrder {
        /// Offending key.
        key: K,
    },
    /// A node's subtrees differ in height by more than one.
    #[error("node {key:?} is unbalanced (balance {balance})")]
    Unbalanced {
        /// Key of the unbalanced node.
        key: K,
        /// Observed balance factor.
        balance: i32,
    },
    /// A node's stored height disagrees with its subtrees.
    #[error("node {key:?} stores height {stored}, expected {actual}")]
    StaleHeight {
        /// Key of the node.
        key: K,
        /// Height stored in the node.
        stored: u32,
        /// Height recomputed from the children.
        actual: u32,
    },
    /// The cached entry count disagrees with the number of nodes.
    #[error("tree reports {cached} entries but holds {actual} nodes")]
    LengthMismatch {
        /// Count returned by [`AvlTree::len`].
        cached: usize,
        /// Nodes actually reachable from the root.
        actual: usize,
    },
}

impl<K: Copy + PartialOrd + Debug, P> AvlTree<K, P> {
    /// Layout info for every node, in ascending key order.
    pub fn node_infos(&self) -> Vec<NodeInfo<K>> {
        let mut out = Vec::with_capacity(self.len());
        collect_infos(&self.root, 0, &mut out);
        out
    }

    /// Verify ordering, balance, stored heights, and the cached length.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation<K>> {
        let mut count = 0;
        check(&self.root, None, None, &mut count)?;
        if count != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                cached: self.len(),
                actual: count,
            });
        }
        Ok(())
    }

    /// A [`Display`] rendering of the tree, rotated a quarter turn: the root is at the left
    /// margin and larger keys are printed above smaller ones.
    pub fn dump(&self) -> TreeDump<'_, K, P> {
        TreeDump { root: &self.root }
    }
}

fn collect_infos<K: Copy, P>(link: &Link<K, P>, depth: usize, out: &mut Vec<NodeInfo<K>>) {
    let Some(node) = link else {
        return;
    };
    collect_infos(&node.left, depth + 1, out);
    out.push(NodeInfo {
        key: node.key,
        height: node.height,
        balance: node.balance(),
        depth,
        order: out.len(),
    });
    collect_infos(&node.right, depth + 1, out);
}

/// Returns the recomputed height of the subtree.
fn check<K: Copy + PartialOrd + Debug, P>(
    link: &Link<K, P>,
    lower: Option<K>,
    upper: Option<K>,
    count: &mut usize,
) -> Result<u32, InvariantViolation<K>> {
    let Some(node) = link else {
        return Ok(0);
    };
    let above_lower = lower.is_none_or(|lo| lt(lo, node.key));
    let below_upper = upper.is_none_or(|hi| lt(node.key, hi));
    if !above_lower || !below_upper {
        return Err(InvariantViolation::OutOfOrder { key: node.key });
    }
    *count += 1;
    let hl = check(&node.left, lower, Some(node.key), count)?;
    let hr = check(&node.right, Some(node.key), upper, count)?;
    let actual = 1 + hl.max(hr);
    if node.height != actual {
        return Err(InvariantViolation::StaleHeight {
            key: node.key,
            stored: node.height,
            actual,
        });
    }
    let balance = node.balance();
    if !(-1..=1).contains(&balance) {
        return Err(InvariantViolation::Unbalanced {
            key: node.key,
            balance,
        });
    }
    Ok(actual)
}

/// Sideways text rendering returned by [`AvlTree::dump`].
///
/// Each node prints as `key [h=height b=balance]`, indented four spaces per level.
pub struct TreeDump<'a, K, P> {
    root: &'a Link<K, P>,
}

impl<K: Debug, P> Display for TreeDump<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.is_none() {
            return writeln!(f, "(empty)");
        }
        write_sideways(f, self.root, 0)
    }
}

impl<K, P> Debug for TreeDump<'_, K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeDump")
            .field("height", &height(self.root))
            .finish_non_exhaustive()
    }
}

fn write_sideways<K: Debug, P>(
    f: &mut fmt::Formatter<'_>,
    link: &Link<K, P>,
    depth: usize,
) -> fmt::Result {
    let Some(node) = link else {
        return Ok(());
    };
    write_sideways(f, &node.right, depth + 1)?;
    writeln!(
        f,
        "{:indent$}{:?} [h={} b={}]",
        "",
        node.key,
        node.height,
        node.balance(),
        indent = depth * 4
    )?;
    write_sideways(f, &node.left, depth + 1)
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borrowing traversals: in-order, pre-order, post-order, and the pruned range walk.
//!
//! All iterators keep an explicit stack bounded by the tree height, so they never recurse and
//! can be dropped early without cost.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::node::{Link, Node};
use crate::types::{KeyRange, lt};

/// In-order iterator over `(key, payload)` pairs in strictly ascending key order.
pub struct Iter<'a, K, P> {
    stack: Vec<&'a Node<K, P>>,
    remaining: usize,
}

impl<'a, K, P> Iter<'a, K, P> {
    pub(crate) fn new(root: &'a Link<K, P>, len: usize) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            remaining: len,
        };
        it.push_left_spine(root.as_deref());
        it
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, P>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, P> Iterator for Iter<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.payload))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, P> ExactSizeIterator for Iter<'_, K, P> {}

impl<K, P> Debug for Iter<'_, K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator: node, then left subtree, then right subtree.
pub struct PreOrder<'a, K, P> {
    stack: Vec<&'a Node<K, P>>,
    remaining: usize,
}

impl<'a, K, P> PreOrder<'a, K, P> {
    pub(crate) fn new(root: &'a Link<K, P>, len: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K, P> Iterator for PreOrder<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some((&node.key, &node.payload))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, P> ExactSizeIterator for PreOrder<'_, K, P> {}

impl<K, P> Debug for PreOrder<'_, K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PreOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Post-order iterator: left subtree, then right subtree, then node.
pub struct PostOrder<'a, K, P> {
    // `true` once the node's children have been scheduled.
    stack: Vec<(&'a Node<K, P>, bool)>,
    remaining: usize,
}

impl<'a, K, P> PostOrder<'a, K, P> {
    pub(crate) fn new(root: &'a Link<K, P>, len: usize) -> Self {
        Self {
            stack: root.as_deref().map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K, P> Iterator for PostOrder<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some((&node.key, &node.payload));
            }
            self.stack.push((node, true));
            if let Some(right) = node.right.as_deref() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left.as_deref() {
                self.stack.push((left, false));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, P> ExactSizeIterator for PostOrder<'_, K, P> {}

impl<K, P> Debug for PostOrder<'_, K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PostOrder")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Pruned in-order walk over the keys in an inclusive [`KeyRange`].
///
/// A left subtree is only entered when the node's key is above `min`, and a right subtree only
/// when the node's key is below `max`, so the walk touches `O(log n + k)` nodes for `k` hits.
/// Entries come out in ascending key order.
pub struct Range<'a, K, P> {
    stack: Vec<&'a Node<K, P>>,
    range: KeyRange<K>,
}

impl<'a, K: Copy + PartialOrd, P> Range<'a, K, P> {
    pub(crate) fn new(root: &'a Link<K, P>, range: KeyRange<K>) -> Self {
        let mut it = Self {
            stack: Vec::new(),
            range,
        };
        if !range.is_empty() {
            it.descend(root.as_deref());
        }
        it
    }

    /// Stack the path to the lowest key `>= min` below `link`.
    fn descend(&mut self, mut link: Option<&'a Node<K, P>>) {
        while let Some(node) = link {
            if lt(node.key, self.range.min) {
                link = node.right.as_deref();
            } else {
                self.stack.push(node);
                link = if lt(self.range.min, node.key) {
                    node.left.as_deref()
                } else {
                    None
                };
            }
        }
    }
}

impl<'a, K: Copy + PartialOrd, P> Iterator for Range<'a, K, P> {
    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if lt(self.range.max, node.key) {
            // Everything still stacked is larger.
            self.stack.clear();
            return None;
        }
        if lt(node.key, self.range.max) {
            self.descend(node.right.as_deref());
        }
        Some((&node.key, &node.payload))
    }
}

impl<K: Debug, P> Debug for Range<'_, K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Range")
            .field("range", &self.range)
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}

/// Pruned range search in node-first order, collecting into `out`.
///
/// Same pruning rule as [`Range`], but entries are emitted as nodes are reached rather than
/// in key order.
pub(crate) fn collect_range_preorder<'a, K: Copy + PartialOrd, P>(
    link: &'a Link<K, P>,
    range: KeyRange<K>,
    out: &mut Vec<(&'a K, &'a P)>,
) {
    let Some(node) = link.as_deref() else {
        return;
    };
    if range.contains(node.key) {
        out.push((&node.key, &node.payload));
    }
    if lt(range.min, node.key) {
        collect_range_preorder(&node.left, range, out);
    }
    if lt(node.key, range.max) {
        collect_range_preorder(&node.right, range, out);
    }
}

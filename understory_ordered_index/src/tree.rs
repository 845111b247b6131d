// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`AvlTree`] API.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::node::{self, Link, height};
use crate::traverse::{Iter, PostOrder, PreOrder, Range, collect_range_preorder};
use crate::types::{KeyRange, cmp_keys, lt};

/// Height-balanced ordered index from a 1D coordinate `K` to an opaque payload `P`.
///
/// Keys are unique; inserting an existing key replaces its payload without changing the shape.
/// Insert, remove, and lookup are `O(log n)`; [`AvlTree::range`] is `O(log n + k)`.
#[derive(Clone)]
pub struct AvlTree<K, P> {
    pub(crate) root: Link<K, P>,
    len: usize,
}

impl<K, P> AvlTree<K, P> {
    /// Create an empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; 0 when empty, 1 for a single entry.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, P> {
        Iter::new(&self.root, self.len)
    }

    /// Payloads in ascending key order.
    pub fn payloads(&self) -> impl ExactSizeIterator<Item = &P> + '_ {
        self.iter().map(|(_, p)| p)
    }

    /// Entries in pre-order (node, left, right).
    pub fn iter_preorder(&self) -> PreOrder<'_, K, P> {
        PreOrder::new(&self.root, self.len)
    }

    /// Entries in post-order (left, right, node).
    pub fn iter_postorder(&self) -> PostOrder<'_, K, P> {
        PostOrder::new(&self.root, self.len)
    }
}

impl<K: Copy + PartialOrd + Debug, P> AvlTree<K, P> {
    /// Insert `payload` at `key`, returning the payload it replaced, if any.
    pub fn insert(&mut self, key: K, payload: P) -> Option<P> {
        let replaced = node::insert(&mut self.root, key, payload);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Remove `key`, returning its payload. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> Option<P> {
        let removed = node::remove(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Payload stored at `key`.
    pub fn get(&self, key: &K) -> Option<&P> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match cmp_keys(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.payload),
            };
        }
        None
    }

    /// Mutable payload stored at `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut P> {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            link = match cmp_keys(key, &node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.payload),
            };
        }
        None
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Key at the root, if any.
    pub fn root_key(&self) -> Option<K> {
        self.root.as_ref().map(|n| n.key)
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &P)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.payload))
    }

    /// Entry with the largest key.
    pub fn last(&self) -> Option<(&K, &P)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.payload))
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, P)> {
        let root = self.root.take()?;
        let (rest, key, payload) = node::take_min(root);
        self.root = rest;
        self.len -= 1;
        Some((key, payload))
    }

    /// Remove and return the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, P)> {
        let root = self.root.take()?;
        let (rest, key, payload) = node::take_max(root);
        self.root = rest;
        self.len -= 1;
        Some((key, payload))
    }

    /// Remove every entry whose key is strictly below `threshold`, in ascending key order.
    pub fn remove_below(&mut self, threshold: K) -> Vec<(K, P)> {
        let mut out = Vec::new();
        while self.first().is_some_and(|(k, _)| lt(*k, threshold)) {
            if let Some(entry) = self.pop_first() {
                out.push(entry);
            }
        }
        out
    }

    /// Entries whose key lies in `[min, max]`, in ascending key order.
    ///
    /// Subtrees that cannot hold a key in the range are skipped. An inverted range yields
    /// nothing.
    pub fn range(&self, min: K, max: K) -> Range<'_, K, P> {
        Range::new(&self.root, KeyRange::new(min, max))
    }

    /// Like [`AvlTree::range`] with a [`KeyRange`].
    pub fn range_in(&self, range: KeyRange<K>) -> Range<'_, K, P> {
        Range::new(&self.root, range)
    }

    /// Entries whose key lies in `[min, max]`, in the order a node-first pruned search
    /// reaches them.
    ///
    /// Visits the same nodes as [`AvlTree::range`]; prefer that unless the traversal order
    /// itself is of interest.
    pub fn range_preorder(&self, min: K, max: K) -> Vec<(&K, &P)> {
        let mut out = Vec::new();
        collect_range_preorder(&self.root, KeyRange::new(min, max), &mut out);
        out
    }
}

impl<K, P> Default for AvlTree<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, P> Debug for AvlTree<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("height", &height(&self.root))
            .field("root", &self.root.as_ref().map(|n| &n.key))
            .finish_non_exhaustive()
    }
}

impl<'a, K, P> IntoIterator for &'a AvlTree<K, P> {
    type Item = (&'a K, &'a P);
    type IntoIter = Iter<'a, K, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Copy + PartialOrd + Debug, P> Extend<(K, P)> for AvlTree<K, P> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, payload) in iter {
            self.insert(key, payload);
        }
    }
}

impl<K: Copy + PartialOrd + Debug, P> FromIterator<(K, P)> for AvlTree<K, P> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

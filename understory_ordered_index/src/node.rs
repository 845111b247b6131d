// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes and the recursive insert/remove/rebalance machinery.
//!
//! Every structural helper takes or returns an owning [`Link`] so a rotation can replace the
//! subtree root in place. Heights are fixed bottom-up on the way back out of the recursion.

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::mem;

use crate::types::cmp_keys;

/// Owning, optional child reference.
pub(crate) type Link<K, P> = Option<Box<Node<K, P>>>;

#[derive(Clone, Debug)]
pub(crate) struct Node<K, P> {
    pub(crate) key: K,
    pub(crate) payload: P,
    /// Height of the subtree rooted here; a leaf is 1, an absent subtree is 0.
    pub(crate) height: u32,
    pub(crate) left: Link<K, P>,
    pub(crate) right: Link<K, P>,
}

impl<K, P> Node<K, P> {
    fn leaf(key: K, payload: P) -> Box<Self> {
        Box::new(Self {
            key,
            payload,
            height: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(crate) fn balance(&self) -> i32 {
        height(&self.left) as i32 - height(&self.right) as i32
    }
}

#[inline]
pub(crate) fn height<K, P>(link: &Link<K, P>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

/// Left rotation on `z`: its right child `y` becomes the subtree root.
fn rotate_left<K, P>(mut z: Box<Node<K, P>>) -> Box<Node<K, P>> {
    let Some(mut y) = z.right.take() else {
        return z;
    };
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

/// Right rotation on `z`: its left child `y` becomes the subtree root.
fn rotate_right<K, P>(mut z: Box<Node<K, P>>) -> Box<Node<K, P>> {
    let Some(mut y) = z.left.take() else {
        return z;
    };
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

/// Refresh the height of `node` and restore the AVL balance at it.
///
/// The `>= 0` / `<= 0` tie-breaks pick a single rotation whenever the heavy child is itself
/// balanced, which is the case deletion produces.
pub(crate) fn rebalance<K, P>(mut node: Box<Node<K, P>>) -> Box<Node<K, P>> {
    node.update_height();
    let balance = node.balance();
    if balance > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn rebalance_link<K, P>(link: &mut Link<K, P>) {
    if let Some(node) = link.take() {
        *link = Some(rebalance(node));
    }
}

/// Insert `payload` at `key` below `link`.
///
/// Returns the payload previously stored at `key`; in that case the shape is untouched.
pub(crate) fn insert<K, P>(link: &mut Link<K, P>, key: K, payload: P) -> Option<P>
where
    K: PartialOrd + Debug,
{
    let Some(node) = link.as_mut() else {
        *link = Some(Node::leaf(key, payload));
        return None;
    };
    let replaced = match cmp_keys(&key, &node.key) {
        Ordering::Less => insert(&mut node.left, key, payload),
        Ordering::Greater => insert(&mut node.right, key, payload),
        Ordering::Equal => return Some(mem::replace(&mut node.payload, payload)),
    };
    if replaced.is_none() {
        rebalance_link(link);
    }
    replaced
}

/// Remove `key` below `link`, returning its payload if it was present.
pub(crate) fn remove<K, P>(link: &mut Link<K, P>, key: &K) -> Option<P>
where
    K: PartialOrd + Debug,
{
    let node = link.as_mut()?;
    match cmp_keys(key, &node.key) {
        Ordering::Less => {
            let removed = remove(&mut node.left, key)?;
            rebalance_link(link);
            Some(removed)
        }
        Ordering::Greater => {
            let removed = remove(&mut node.right, key)?;
            rebalance_link(link);
            Some(removed)
        }
        Ordering::Equal => unlink(link),
    }
}

/// Detach the node at `link`, splicing its children back in.
fn unlink<K, P>(link: &mut Link<K, P>) -> Option<P> {
    let mut node = link.take()?;
    match (node.left.take(), node.right.take()) {
        (None, only) | (only, None) => {
            *link = only;
            let Node { payload, .. } = *node;
            Some(payload)
        }
        (Some(left), Some(right)) => {
            // Promote the in-order successor into this node.
            let (rest, key, payload) = take_min(right);
            node.left = Some(left);
            node.right = rest;
            node.key = key;
            let removed = mem::replace(&mut node.payload, payload);
            *link = Some(rebalance(node));
            Some(removed)
        }
    }
}

/// Remove the minimum entry of the subtree rooted at `node`.
///
/// Returns the rebalanced remainder of the subtree together with the removed key and payload.
pub(crate) fn take_min<K, P>(mut node: Box<Node<K, P>>) -> (Link<K, P>, K, P) {
    match node.left.take() {
        Some(left) => {
            let (rest, key, payload) = take_min(left);
            node.left = rest;
            (Some(rebalance(node)), key, payload)
        }
        None => {
            let Node {
                key,
                payload,
                right,
                ..
            } = *node;
            (right, key, payload)
        }
    }
}

/// Remove the maximum entry of the subtree rooted at `node`.
pub(crate) fn take_max<K, P>(mut node: Box<Node<K, P>>) -> (Link<K, P>, K, P) {
    match node.right.take() {
        Some(right) => {
            let (rest, key, payload) = take_max(right);
            node.right = rest;
            (Some(rebalance(node)), key, payload)
        }
        None => {
            let Node {
                key, payload, left, ..
            } = *node;
            (left, key, payload)
        }
    }
}

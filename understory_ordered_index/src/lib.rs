// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ordered_index --heading-base-level=0

//! Understory Ordered Index: a height-balanced (AVL) index keyed by a 1D coordinate.
//!
//! Understory Ordered Index is a building block for content that streams past a moving
//! viewport along one axis: obstacles on a scrolling track, rows in a long list, events on a
//! timeline.
//!
//! - Insert and remove `(key, payload)` entries in `O(log n)`; keys are unique.
//! - Query an inclusive key window with [`AvlTree::range`] in `O(log n + k)`, in ascending order.
//! - Walk all entries in-order, pre-order, or post-order.
//! - Inspect heights and balance factors for debug overlays without touching the tree.
//!
//! It is generic over the key type `K` (any `Copy + PartialOrd` scalar such as `f64` or `i64`)
//! and treats payloads as opaque.
//!
//! # Example
//!
//! ```rust
//! use understory_ordered_index::AvlTree;
//!
//! let mut tree: AvlTree<f64, &str> = AvlTree::new();
//! tree.insert(400.0, "rock");
//! tree.insert(950.0, "tree");
//! tree.insert(1600.0, "hole");
//!
//! // Everything from 200 behind to 1000 ahead of a cursor at 600.
//! let visible: Vec<_> = tree.range(400.0, 1600.0).map(|(_, p)| *p).collect();
//! assert_eq!(visible, ["rock", "tree", "hole"]);
//!
//! // Drop what the cursor has left behind.
//! let passed = tree.remove_below(900.0);
//! assert_eq!(passed, [(400.0, "rock")]);
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! ## Diagnostics
//!
//! [`AvlTree::node_infos`] reports key, height, balance, depth, and in-order position per node,
//! which is enough to lay out a tree diagram. [`AvlTree::dump`] renders a plain-text view, and
//! [`AvlTree::check_invariants`] verifies ordering, balance, and stored heights.
//!
//! ```rust
//! use understory_ordered_index::AvlTree;
//!
//! let tree: AvlTree<i64, ()> = (1..=7).map(|k| (k, ())).collect();
//! assert!(tree.check_invariants().is_ok());
//! assert_eq!(tree.height(), 3);
//! print!("{}", tree.dump());
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point keys. Debug builds assert.
//!
//! ### Threading
//!
//! The tree has a single owner and all mutation goes through `&mut self`. To share it between
//! threads, wrap the whole tree in one mutex.

#![no_std]

extern crate alloc;

pub mod diagnostics;
mod node;
pub mod traverse;
pub mod tree;
pub mod types;

pub use diagnostics::{InvariantViolation, NodeInfo, TreeDump};
pub use traverse::{Iter, PostOrder, PreOrder, Range};
pub use tree::AvlTree;
pub use types::KeyRange;

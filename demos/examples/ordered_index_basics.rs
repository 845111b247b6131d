// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered index basics.
//!
//! Insert, overwrite, query a window, and walk the tree in each order.
//!
//! Run:
//! - `cargo run -p understory_demos --example ordered_index_basics`

use understory_ordered_index::AvlTree;

fn main() {
    let mut tree: AvlTree<f64, &str> = AvlTree::new();
    for (x, name) in [(50.0, "e"), (25.0, "b"), (75.0, "g"), (10.0, "a"), (30.0, "c")] {
        tree.insert(x, name);
    }

    // Same key: payload replaced, shape unchanged
    let old = tree.insert(30.0, "C");
    println!("replaced {old:?} at 30");

    let hits: Vec<_> = tree.range(20.0, 65.0).map(|(_, p)| *p).collect();
    println!("range [20, 65]: {hits:?}");

    let inorder: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
    let pre: Vec<_> = tree.iter_preorder().map(|(k, _)| *k).collect();
    let post: Vec<_> = tree.iter_postorder().map(|(k, _)| *k).collect();
    println!("in-order:   {inorder:?}");
    println!("pre-order:  {pre:?}");
    println!("post-order: {post:?}");

    let removed = tree.remove(&50.0);
    println!("removed {removed:?}; new root {:?}", tree.root_key());
}
